//! Administrator dashboard.

mod attendance;
mod employees;
mod overview;
mod salary;

pub use attendance::AdminAttendance;
pub use employees::AdminEmployees;
pub use overview::AdminOverview;
pub use salary::AdminSalary;

use api::models::Employee;
use dioxus::prelude::*;

/// Drop-down choosing one employee; writes the record id into `selected`.
#[component]
fn EmployeePicker(employees: Vec<Employee>, mut selected: Signal<Option<i64>>) -> Element {
    let current = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        select {
            class: "picker",
            value: "{current}",
            onchange: move |e| selected.set(e.value().parse().ok()),
            option { value: "", "Select an employee" }
            for employee in employees {
                option {
                    key: "{employee.id}",
                    value: "{employee.id}",
                    "{employee.full_name()} ({employee.employee_id})"
                }
            }
        }
    }
}
