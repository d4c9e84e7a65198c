use api::ApiError;
use dioxus::prelude::*;

use crate::use_api;
use crate::views::format::{date, money};
use crate::views::ErrorBanner;

#[component]
pub fn EmployeeSalary() -> Element {
    let api = use_api();
    let records = use_resource(move || {
        let api = api.clone();
        async move {
            let mut records = api.employee().my_salary_records().await?;
            records.sort_by_key(|r| std::cmp::Reverse((r.year, r.month)));
            Ok::<_, ApiError>(records)
        }
    });

    let table = match &*records.read() {
        None => rsx! { p { class: "muted", "Loading salary records..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No salary records yet." } },
        Some(Ok(list)) => rsx! {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Period" } th { "Base" } th { "Overtime" } th { "Bonus" }
                        th { "Deductions" } th { "Net" } th { "Status" } th { "Paid on" }
                    }
                }
                tbody {
                    for record in list.iter() {
                        tr {
                            key: "{record.id}",
                            td { "{record.period()}" }
                            td { "{money(record.base_amount)}" }
                            td { "{money(record.overtime_amount)}" }
                            td { "{money(record.bonus)}" }
                            td { "{money(record.deductions)}" }
                            td { strong { "{money(record.net_amount)}" } }
                            td { span { class: "badge", "{record.status.label()}" } }
                            td { "{date(record.payment_date)}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h2 { "Salary" }
        {table}
    }
}
