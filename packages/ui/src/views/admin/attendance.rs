use api::models::{AttendanceRecord, AttendanceStatus, AttendanceUpdate, DateRange};
use chrono::NaiveDate;
use dioxus::prelude::*;
use tracing::error;

use super::EmployeePicker;
use crate::use_api;
use crate::views::format::{clock, date, text};
use crate::views::ErrorBanner;

#[component]
pub fn AdminAttendance() -> Element {
    let api = use_api();
    let selected = use_signal(|| Option::<i64>::None);
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);

    let employees_api = api.clone();
    let employees = use_resource(move || {
        let api = employees_api.clone();
        async move { api.admin().employees().await }
    });

    let mut records = use_resource(move || {
        let api = api.clone();
        let range = DateRange {
            start: NaiveDate::parse_from_str(&start(), "%Y-%m-%d").ok(),
            end: NaiveDate::parse_from_str(&end(), "%Y-%m-%d").ok(),
        };
        let employee = selected();
        async move {
            match employee {
                Some(id) => api.admin().employee_attendance(id, range).await.map(Some),
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
        None => rsx! { p { class: "muted", "Loading attendance..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(None)) => rsx! { p { class: "muted", "Choose an employee to see their attendance." } },
        Some(Ok(Some(list))) if list.is_empty() => rsx! { p { class: "muted", "No records in this period." } },
        Some(Ok(Some(list))) => rsx! {
            table {
                class: "table",
                thead {
                    tr { th { "Date" } th { "Status" } th { "Check in" } th { "Check out" } th { "Notes" } }
                }
                tbody {
                    for record in list.iter().cloned() {
                        AttendanceRow {
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
        h2 { "Attendance" }
        div {
            class: "toolbar",
            {picker}
            label { "From" }
            input { r#type: "date", value: "{start}", oninput: move |e| start.set(e.value()) }
            label { "To" }
            input { r#type: "date", value: "{end}", oninput: move |e| end.set(e.value()) }
        }
        {table}
    }
}

/// One record with an editable status.
#[component]
fn AttendanceRow(record: AttendanceRecord, on_updated: EventHandler<()>) -> Element {
    let api = use_api();
    let mut failure = use_signal(|| Option::<String>::None);
    let id = record.id;

    let onchange = move |e: FormEvent| {
        let api = api.clone();
        let chosen = AttendanceStatus::from_str_opt(&e.value());
        async move {
            let Some(status) = chosen else {
                return;
            };
            let update = AttendanceUpdate {
                status: Some(status),
                ..AttendanceUpdate::default()
            };
            match api.admin().update_attendance(id, &update).await {
                Ok(_) => on_updated.call(()),
                Err(e) => {
                    error!(error = %e, record = id, "attendance update failed");
                    failure.set(Some(e.message()));
                }
            }
        }
    };

    rsx! {
        tr {
            td { "{date(Some(record.date))}" }
            td {
                select {
                    value: "{record.status.as_str()}",
                    onchange: onchange,
                    for status in AttendanceStatus::ALL {
                        option { key: "{status.as_str()}", value: "{status.as_str()}", "{status.label()}" }
                    }
                }
                if let Some(message) = failure() {
                    ErrorBanner { message }
                }
            }
            td { "{clock(record.check_in_time)}" }
            td { "{clock(record.check_out_time)}" }
            td { "{text(&record.notes)}" }
        }
    }
}
