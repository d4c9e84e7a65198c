use dioxus::prelude::*;

use crate::use_api;
use crate::views::format::{date, optional_money, text};
use crate::views::ErrorBanner;

#[component]
pub fn EmployeeProfile() -> Element {
    let api = use_api();
    let employee = use_resource(move || {
        let api = api.clone();
        async move { api.employee().me().await }
    });

    let body = match &*employee.read() {
        None => rsx! { p { class: "muted", "Loading profile..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(employee)) => {
            let email = employee
                .user
                .as_ref()
                .map(|u| u.email.clone())
                .unwrap_or_else(|| "-".to_string());
            rsx! {
                dl {
                    class: "details",
                    dt { "Name" } dd { "{employee.full_name()}" }
                    dt { "Employee ID" } dd { "{employee.employee_id}" }
                    dt { "Email" } dd { "{email}" }
                    dt { "Phone" } dd { "{text(&employee.phone)}" }
                    dt { "Address" } dd { "{text(&employee.address)}" }
                    dt { "Date of birth" } dd { "{date(employee.date_of_birth)}" }
                    dt { "Department" } dd { "{text(&employee.department)}" }
                    dt { "Position" } dd { "{text(&employee.position)}" }
                    dt { "Hire date" } dd { "{date(Some(employee.hire_date))}" }
                    dt { "Base salary" } dd { "{optional_money(employee.base_salary)}" }
                }
            }
        }
    };

    rsx! {
        h2 { "My Profile" }
        {body}
    }
}
