use api::models::{AttendanceStatus, DateRange};
use api::ApiError;
use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

use crate::views::format::money;
use crate::views::ErrorBanner;
use crate::{use_api, Route};

/// Greeting plus this month's attendance and the latest payslip.
#[component]
pub fn EmployeeOverview() -> Element {
    let api = use_api();
    let summary = use_resource(move || {
        let api = api.clone();
        async move {
            let me = api.employee();
            let employee = me.me().await?;
            let today = Local::now().date_naive();
            let month = DateRange {
                start: NaiveDate::from_ymd_opt(today.year(), today.month(), 1),
                end: Some(today),
            };
            let attendance = me.my_attendance(month).await?;
            let present = attendance
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count();
            let latest = me
                .my_salary_records()
                .await?
                .into_iter()
                .max_by_key(|r| (r.year, r.month));
            Ok::<_, ApiError>((employee, present, latest))
        }
    });

    let body = match &*summary.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok((employee, present, latest))) => {
            let payslip = latest
                .as_ref()
                .map(|r| format!("{} for {} ({})", money(r.net_amount), r.period(), r.status.label()))
                .unwrap_or_else(|| "No salary records yet".to_string());
            rsx! {
                p { class: "lead", "Welcome back, {employee.first_name}!" }
                div {
                    class: "stat-grid",
                    div {
                        class: "stat-card",
                        span { class: "stat-value", "{present}" }
                        span { class: "stat-label", "Days present this month" }
                    }
                    div {
                        class: "stat-card",
                        span { class: "stat-value", "{payslip}" }
                        span { class: "stat-label", "Latest salary" }
                    }
                }
            }
        }
    };

    rsx! {
        h2 { "Overview" }
        {body}
        div {
            class: "quick-links",
            Link { to: Route::EmployeeAttendance {}, class: "btn btn-secondary", "Check in / out" }
            Link { to: Route::EmployeeSalary {}, class: "btn btn-secondary", "Salary history" }
        }
    }
}
