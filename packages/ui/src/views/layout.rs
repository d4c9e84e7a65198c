use dioxus::prelude::*;
use store::Role;

use crate::{LogoutButton, Protected, Route, Sidebar};

#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        Protected {
            required: Role::Admin,
            DashboardShell { role: Role::Admin, Outlet::<Route> {} }
        }
    }
}

#[component]
pub fn EmployeeLayout() -> Element {
    rsx! {
        Protected {
            required: Role::Employee,
            DashboardShell { role: Role::Employee, Outlet::<Route> {} }
        }
    }
}

/// Sidebar, header and content area of both dashboards.
#[component]
fn DashboardShell(role: Role, children: Element) -> Element {
    let title = match role {
        Role::Admin => "Admin Dashboard",
        Role::Employee => "Employee Dashboard",
    };

    rsx! {
        div {
            class: "dashboard",
            Sidebar { role }
            div {
                class: "dashboard-main",
                header {
                    class: "dashboard-header",
                    h1 { "{title}" }
                    LogoutButton { class: "btn btn-secondary" }
                }
                main {
                    class: "dashboard-content",
                    {children}
                }
            }
        }
    }
}

/// Inline failure notice.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "alert alert-error", "{message}" }
    }
}
