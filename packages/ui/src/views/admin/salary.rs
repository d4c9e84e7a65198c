use api::models::{SalaryRecord, SalaryStatus, SalaryUpdate};
use dioxus::prelude::*;
use tracing::{error, info};

use super::EmployeePicker;
use crate::use_api;
use crate::views::format::{date, money};
use crate::views::ErrorBanner;

#[component]
pub fn AdminSalary() -> Element {
    let api = use_api();
    let selected = use_signal(|| Option::<i64>::None);

    let employees_api = api.clone();
    let employees = use_resource(move || {
        let api = employees_api.clone();
        async move { api.admin().employees().await }
    });

    let mut records = use_resource(move || {
        let api = api.clone();
        let employee = selected();
        async move {
            match employee {
                Some(id) => api.admin().employee_salary_records(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let picker = match &*employees.read() {
        None => rsx! { p { class: "muted", "Loading employees..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(list)) => rsx! { EmployeePicker { employees: list.clone(), selected } },
    };

    let table = match &*records.read() {
        None => rsx! { p { class: "muted", "Loading salary records..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(None)) => rsx! { p { class: "muted", "Choose an employee to see their salary records." } },
        Some(Ok(Some(list))) if list.is_empty() => rsx! { p { class: "muted", "No salary records yet." } },
        Some(Ok(Some(list))) => rsx! {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Period" } th { "Base" } th { "Overtime" } th { "Bonus" }
                        th { "Deductions" } th { "Net" } th { "Status" } th { "Paid on" } th {}
                    }
                }
                tbody {
                    for record in list.iter().cloned() {
                        SalaryRow {
                            key: "{record.id}",
                            record,
                            on_updated: move |_| records.restart(),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h2 { "Salary" }
        div { class: "toolbar", {picker} }
        {table}
    }
}

#[component]
fn SalaryRow(record: SalaryRecord, on_updated: EventHandler<()>) -> Element {
    let api = use_api();
    let mut failure = use_signal(|| Option::<String>::None);
    let id = record.id;
    let next = match record.status {
        SalaryStatus::Paid => SalaryStatus::Pending,
        SalaryStatus::Pending | SalaryStatus::Overdue => SalaryStatus::Paid,
    };
    let action = match next {
        SalaryStatus::Paid => "Mark paid",
        _ => "Mark pending",
    };

    let onclick = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            match api.admin().update_salary_record(id, &SalaryUpdate::status(next)).await {
                Ok(updated) => {
                    info!(record = id, status = updated.status.label(), "salary status changed");
                    on_updated.call(());
                }
                Err(e) => {
                    error!(error = %e, record = id, "salary update failed");
                    failure.set(Some(e.message()));
                }
            }
        }
    };

    rsx! {
        tr {
            td { "{record.period()}" }
            td { "{money(record.base_amount)}" }
            td { "{money(record.overtime_amount)}" }
            td { "{money(record.bonus)}" }
            td { "{money(record.deductions)}" }
            td { strong { "{money(record.net_amount)}" } }
            td { span { class: "badge", "{record.status.label()}" } }
            td { "{date(record.payment_date)}" }
            td {
                button { class: "btn btn-link", onclick: onclick, "{action}" }
                if let Some(message) = failure() {
                    ErrorBanner { message }
                }
            }
        }
    }
}
