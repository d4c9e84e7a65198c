use api::models::{AttendanceStatus, AttendanceSubmission, DateRange};
use api::ApiError;
use chrono::{Duration, Local, NaiveDate};
use dioxus::prelude::*;
use tracing::{error, info};

use crate::use_api;
use crate::views::format::{clock, date, non_empty, text};
use crate::views::ErrorBanner;

/// History window shown below the clock buttons.
const HISTORY_DAYS: i64 = 30;

#[component]
pub fn EmployeeAttendance() -> Element {
    let api = use_api();
    let mut notice = use_signal(|| Option::<String>::None);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let history_api = api.clone();
    let mut history = use_resource(move || {
        let api = history_api.clone();
        async move {
            let today = Local::now().date_naive();
            let range = DateRange::between(today - Duration::days(HISTORY_DAYS), today);
            let mut records = api.employee().my_attendance(range).await?;
            records.sort_by(|a, b| b.date.cmp(&a.date));
            Ok::<_, ApiError>(records)
        }
    });

    let check_in_api = api.clone();
    let check_in = move |_: MouseEvent| {
        let api = check_in_api.clone();
        async move {
            busy.set(true);
            failure.set(None);
            match api.employee().check_in().await {
                Ok(event) => {
                    info!(time = %event.time, "checked in");
                    notice.set(Some(format!("{} at {}", event.message, clock(Some(event.time)))));
                    history.restart();
                }
                Err(e) => failure.set(Some(e.message())),
            }
            busy.set(false);
        }
    };

    let check_out_api = api.clone();
    let check_out = move |_: MouseEvent| {
        let api = check_out_api.clone();
        async move {
            busy.set(true);
            failure.set(None);
            match api.employee().check_out().await {
                Ok(event) => {
                    info!(time = %event.time, "checked out");
                    notice.set(Some(format!("{} at {}", event.message, clock(Some(event.time)))));
                    history.restart();
                }
                Err(e) => failure.set(Some(e.message())),
            }
            busy.set(false);
        }
    };

    let table = match &*history.read() {
        None => rsx! { p { class: "muted", "Loading attendance..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No attendance recorded in the last {HISTORY_DAYS} days." } },
        Some(Ok(list)) => rsx! {
            table {
                class: "table",
                thead {
                    tr { th { "Date" } th { "Status" } th { "Check in" } th { "Check out" } th { "Notes" } }
                }
                tbody {
                    for record in list.iter() {
                        tr {
                            key: "{record.id}",
                            td { "{date(Some(record.date))}" }
                            td { span { class: "badge", "{record.status.label()}" } }
                            td { "{clock(record.check_in_time)}" }
                            td { "{clock(record.check_out_time)}" }
                            td { "{text(&record.notes)}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h2 { "Attendance" }
        div {
            class: "card",
            h3 { "Today" }
            div {
                class: "toolbar",
                button { class: "btn btn-primary", disabled: busy(), onclick: check_in, "Check in" }
                button { class: "btn btn-secondary", disabled: busy(), onclick: check_out, "Check out" }
            }
            if let Some(message) = notice() {
                div { class: "alert alert-success", "{message}" }
            }
            if let Some(message) = failure() {
                ErrorBanner { message }
            }
        }
        LeaveRequest { on_submitted: move |_| history.restart() }
        h3 { "Recent history" }
        {table}
    }
}

/// Form for recording a leave day (sick, vacation or other).
#[component]
fn LeaveRequest(on_submitted: EventHandler<()>) -> Element {
    let api = use_api();
    let mut day = use_signal(String::new);
    let mut kind = use_signal(|| AttendanceStatus::LEAVE_KINDS[0]);
    let mut notes = use_signal(String::new);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let parsed = NaiveDate::parse_from_str(&day(), "%Y-%m-%d");
        let submission = parsed.map(|date| AttendanceSubmission {
            date,
            status: kind(),
            notes: non_empty(notes()),
        });
        async move {
            sent.set(false);
            let Ok(submission) = submission else {
                failure.set(Some("Pick the day of leave".to_string()));
                return;
            };
            match api.employee().submit_attendance(&submission).await {
                Ok(_) => {
                    failure.set(None);
                    sent.set(true);
                    notes.set(String::new());
                    on_submitted.call(());
                }
                Err(e) => {
                    error!(error = %e, "leave request failed");
                    failure.set(Some(e.message()));
                }
            }
        }
    };

    rsx! {
        form {
            class: "card form",
            onsubmit: onsubmit,
            h3 { "Request leave" }
            label { "Date" }
            input { r#type: "date", value: "{day}", oninput: move |e| day.set(e.value()) }
            label { "Type" }
            select {
                value: "{kind().as_str()}",
                onchange: move |e| {
                    if let Some(status) = AttendanceStatus::from_str_opt(&e.value()) {
                        kind.set(status);
                    }
                },
                for status in AttendanceStatus::LEAVE_KINDS {
                    option { key: "{status.as_str()}", value: "{status.as_str()}", "{status.label()}" }
                }
            }
            label { "Notes" }
            textarea { value: "{notes}", oninput: move |e| notes.set(e.value()) }
            button { class: "btn btn-primary", r#type: "submit", "Submit" }
            if sent() {
                div { class: "alert alert-success", "Leave request recorded." }
            }
            if let Some(message) = failure() {
                ErrorBanner { message }
            }
        }
    }
}
