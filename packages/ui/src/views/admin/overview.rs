use api::models::InvitationStatus;
use api::ApiError;
use dioxus::prelude::*;

use crate::views::ErrorBanner;
use crate::{use_api, Route};

#[component]
pub fn AdminOverview() -> Element {
    let api = use_api();
    let summary = use_resource(move || {
        let api = api.clone();
        async move {
            let admin = api.admin();
            let employees = admin.employees().await?;
            let invitations = admin.invitations().await?;
            let pending = invitations
                .iter()
                .filter(|i| i.status == InvitationStatus::Pending)
                .count();
            Ok::<_, ApiError>((employees.len(), pending))
        }
    });

    let cards = match &*summary.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok((employees, pending))) => rsx! {
            div {
                class: "stat-grid",
                StatCard { label: "Employees", value: employees.to_string() }
                StatCard { label: "Pending invitations", value: pending.to_string() }
            }
        },
    };

    rsx! {
        h2 { "Overview" }
        {cards}
        div {
            class: "quick-links",
            Link { to: Route::AdminEmployees {}, class: "btn btn-secondary", "Manage employees" }
            Link { to: Route::AdminAttendance {}, class: "btn btn-secondary", "Review attendance" }
            Link { to: Route::AdminSalary {}, class: "btn btn-secondary", "Process salaries" }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
