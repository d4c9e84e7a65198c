//! Employee records, invitations and accounts.

use std::str::FromStr;

use api::models::{Employee, EmployeeUpdate, NewInvitation, NewUser};
use chrono::NaiveDate;
use dioxus::prelude::*;
use rust_decimal::Decimal;
use store::Role;
use tracing::{error, info};

use crate::use_api;
use crate::views::format::{date, non_empty, optional_money, text};
use crate::views::ErrorBanner;

#[component]
pub fn AdminEmployees() -> Element {
    let api = use_api();
    let mut editing = use_signal(|| Option::<Employee>::None);

    let employees_api = api.clone();
    let mut employees = use_resource(move || {
        let api = employees_api.clone();
        async move { api.admin().employees().await }
    });
    let mut invitations = use_resource(move || {
        let api = api.clone();
        async move { api.admin().invitations().await }
    });

    let employee_table = match &*employees.read() {
        None => rsx! { p { class: "muted", "Loading employees..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No employees yet." } },
        Some(Ok(list)) => rsx! {
            table {
                class: "table",
                thead {
                    tr {
                        th { "ID" } th { "Name" } th { "Department" } th { "Position" }
                        th { "Hired" } th { "Base salary" } th {}
                    }
                }
                tbody {
                    for employee in list.iter().cloned() {
                        tr {
                            key: "{employee.id}",
                            td { "{employee.employee_id}" }
                            td { "{employee.full_name()}" }
                            td { "{text(&employee.department)}" }
                            td { "{text(&employee.position)}" }
                            td { "{date(Some(employee.hire_date))}" }
                            td { "{optional_money(employee.base_salary)}" }
                            td {
                                button {
                                    class: "btn btn-link",
                                    onclick: {
                                        let employee = employee.clone();
                                        move |_| editing.set(Some(employee.clone()))
                                    },
                                    "Edit"
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    let invitation_table = match &*invitations.read() {
        None => rsx! { p { class: "muted", "Loading invitations..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No invitations sent." } },
        Some(Ok(list)) => rsx! {
            table {
                class: "table",
                thead {
                    tr { th { "Email" } th { "Employee ID" } th { "Status" } th { "Expires" } }
                }
                tbody {
                    for invitation in list.iter() {
                        tr {
                            key: "{invitation.id}",
                            td { "{invitation.email}" }
                            td { "{invitation.employee_id}" }
                            td { span { class: "badge", "{invitation.status.label()}" } }
                            td { "{date(Some(invitation.expires_at.date_naive()))}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h2 { "Employees" }
        if let Some(employee) = editing() {
            EditEmployee {
                key: "{employee.id}",
                employee: employee.clone(),
                on_close: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        employees.restart();
                    }
                },
            }
        }
        {employee_table}

        h2 { "Invitations" }
        InviteForm { on_sent: move |_| invitations.restart() }
        {invitation_table}

        h2 { "Accounts" }
        AccountsSection {}
    }
}

/// Editable fields of an employee, as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
struct EmployeeForm {
    department: String,
    position: String,
    phone: String,
    base_salary: String,
}

impl EmployeeForm {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            department: employee.department.clone().unwrap_or_default(),
            position: employee.position.clone().unwrap_or_default(),
            phone: employee.phone.clone().unwrap_or_default(),
            base_salary: employee
                .base_salary
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }

    /// Update for `original`. A text field the admin blanked out is sent as an
    /// empty string so the backend clears it; one that was never set is omitted.
    fn to_update(&self, original: &Employee) -> Result<EmployeeUpdate, String> {
        let base_salary = match non_empty(self.base_salary.clone()) {
            None => None,
            Some(raw) => Some(
                Decimal::from_str(&raw).map_err(|_| "Base salary must be a number".to_string())?,
            ),
        };
        Ok(EmployeeUpdate {
            department: edited(&original.department, &self.department),
            position: edited(&original.position, &self.position),
            phone: edited(&original.phone, &self.phone),
            base_salary,
            ..EmployeeUpdate::default()
        })
    }
}

fn edited(original: &Option<String>, input: &str) -> Option<String> {
    match non_empty(input.to_string()) {
        Some(value) => Some(value),
        None if original.as_deref().is_some_and(|o| !o.is_empty()) => Some(String::new()),
        None => None,
    }
}

/// Edit form for one employee. Keyed by employee id at the call site, so
/// choosing another row starts from that employee's values.
#[component]
fn EditEmployee(employee: Employee, on_close: EventHandler<bool>) -> Element {
    let api = use_api();
    let mut form = use_signal(|| EmployeeForm::from_employee(&employee));
    let mut failure = use_signal(|| Option::<String>::None);
    let id = employee.id;

    let onsubmit = {
        let employee = employee.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let api = api.clone();
            let update = form.read().to_update(&employee);
            async move {
                let update = match update {
                    Ok(update) => update,
                    Err(message) => {
                        failure.set(Some(message));
                        return;
                    }
                };
                match api.admin().update_employee(id, &update).await {
                    Ok(_) => {
                        info!(employee = id, "employee updated");
                        on_close.call(true);
                    }
                    Err(e) => {
                        error!(error = %e, "employee update failed");
                        failure.set(Some(e.message()));
                    }
                }
            }
        }
    };

    let current = form();

    rsx! {
        form {
            class: "card inline-form",
            onsubmit: onsubmit,
            h3 { "Edit {employee.full_name()}" }
            if let Some(message) = failure() {
                ErrorBanner { message }
            }
            label { "Department" }
            input {
                value: "{current.department}",
                oninput: move |e| form.write().department = e.value(),
            }
            label { "Position" }
            input {
                value: "{current.position}",
                oninput: move |e| form.write().position = e.value(),
            }
            label { "Phone" }
            input {
                value: "{current.phone}",
                oninput: move |e| form.write().phone = e.value(),
            }
            label { "Base salary" }
            input {
                value: "{current.base_salary}",
                oninput: move |e| form.write().base_salary = e.value(),
            }
            div {
                class: "form-actions",
                button { class: "btn btn-primary", r#type: "submit", "Save" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_close.call(false),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn InviteForm(on_sent: EventHandler<()>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut employee_id = use_signal(String::new);
    let mut hire_date = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut base_salary = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let api = api.clone();
        async move {
            let Ok(hire) = NaiveDate::parse_from_str(hire_date().trim(), "%Y-%m-%d") else {
                status.set(Some(Err("Hire date is required (YYYY-MM-DD)".to_string())));
                return;
            };
            if !email().contains('@') || employee_id().trim().is_empty() {
                status.set(Some(Err("Email and employee ID are required".to_string())));
                return;
            }
            let base_salary = match non_empty(base_salary()).map(|s| Decimal::from_str(&s)) {
                None => None,
                Some(Ok(amount)) => Some(amount),
                Some(Err(_)) => {
                    status.set(Some(Err("Base salary must be a number".to_string())));
                    return;
                }
            };
            let invitation = NewInvitation {
                email: email().trim().to_string(),
                employee_id: employee_id().trim().to_string(),
                hire_date: hire,
                department: non_empty(department()),
                position: non_empty(position()),
                base_salary,
            };
            match api.admin().create_invitation(&invitation).await {
                Ok(sent) => {
                    info!(invitation = sent.id, "invitation created");
                    status.set(Some(Ok(format!("Invitation sent to {}", sent.email))));
                    email.set(String::new());
                    employee_id.set(String::new());
                    on_sent.call(());
                }
                Err(e) => {
                    error!(error = %e, "invitation failed");
                    status.set(Some(Err(e.message())));
                }
            }
        }
    };

    rsx! {
        form {
            class: "card inline-form",
            onsubmit: onsubmit,
            {match status() {
                Some(Ok(message)) => rsx! { div { class: "alert alert-success", "{message}" } },
                Some(Err(message)) => rsx! { ErrorBanner { message } },
                None => rsx! {},
            }}
            input { placeholder: "Email", r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
            input { placeholder: "Employee ID", value: "{employee_id}", oninput: move |e| employee_id.set(e.value()) }
            input { r#type: "date", value: "{hire_date}", oninput: move |e| hire_date.set(e.value()) }
            input { placeholder: "Department", value: "{department}", oninput: move |e| department.set(e.value()) }
            input { placeholder: "Position", value: "{position}", oninput: move |e| position.set(e.value()) }
            input { placeholder: "Base salary", value: "{base_salary}", oninput: move |e| base_salary.set(e.value()) }
            button { class: "btn btn-primary", r#type: "submit", "Send invitation" }
        }
    }
}

/// Login accounts, including admins who have no employee record.
#[component]
fn AccountsSection() -> Element {
    let api = use_api();
    let list_api = api.clone();
    let mut users = use_resource(move || {
        let api = list_api.clone();
        async move { api.admin().users().await }
    });

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut admin = use_signal(|| false);
    let mut failure = use_signal(|| Option::<String>::None);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let api = api.clone();
        async move {
            failure.set(None);
            let user = NewUser {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: if admin() { Role::Admin } else { Role::Employee },
            };
            if user.username.is_empty() || user.password.is_empty() {
                failure.set(Some("Username and password are required".to_string()));
                return;
            }
            match api.admin().create_user(&user).await {
                Ok(created) => {
                    info!(user = created.id, role = %created.role, "account created");
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    users.restart();
                }
                Err(e) => failure.set(Some(e.message())),
            }
        }
    };

    let table = match &*users.read() {
        None => rsx! { p { class: "muted", "Loading accounts..." } },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.message() } },
        Some(Ok(list)) => rsx! {
            table {
                class: "table",
                thead { tr { th { "Username" } th { "Email" } th { "Role" } th { "Active" } } }
                tbody {
                    for user in list.iter() {
                        tr {
                            key: "{user.id}",
                            td { "{user.username}" }
                            td { "{user.email}" }
                            td { "{user.role}" }
                            td { if user.is_active { "Yes" } else { "No" } }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        form {
            class: "card inline-form",
            onsubmit: onsubmit,
            if let Some(message) = failure() {
                ErrorBanner { message }
            }
            input { placeholder: "Username", value: "{username}", oninput: move |e| username.set(e.value()) }
            input { placeholder: "Email", r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
            input { placeholder: "Password", r#type: "password", autocomplete: "new-password", value: "{password}", oninput: move |e| password.set(e.value()) }
            label {
                input { r#type: "checkbox", checked: admin(), onchange: move |e| admin.set(e.checked()) }
                " Administrator"
            }
            button { class: "btn btn-primary", r#type: "submit", "Create account" }
        }
        {table}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, department: Option<&str>, phone: Option<&str>) -> Employee {
        Employee {
            id,
            user_id: id + 100,
            employee_id: format!("EMP-{id}"),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            phone: phone.map(Into::into),
            address: None,
            date_of_birth: None,
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 9).unwrap(),
            department: department.map(Into::into),
            position: Some("Engineer".into()),
            base_salary: Some(Decimal::from(5000)),
            user: None,
        }
    }

    #[test]
    fn test_form_starts_from_the_chosen_employee() {
        let first = employee(1, Some("R&D"), Some("555-0100"));
        let second = employee(2, Some("Sales"), None);

        let form = EmployeeForm::from_employee(&second);
        let update = form.to_update(&second).unwrap();

        assert_ne!(form, EmployeeForm::from_employee(&first));
        assert_eq!(update.department.as_deref(), Some("Sales"));
        assert_eq!(update.phone, None);
        assert_eq!(update.base_salary, Some(Decimal::from(5000)));
    }

    #[test]
    fn test_blanked_field_is_cleared() {
        let original = employee(1, Some("R&D"), Some("555-0100"));
        let mut form = EmployeeForm::from_employee(&original);
        form.department = "  ".into();
        form.phone = String::new();

        let update = form.to_update(&original).unwrap();

        assert_eq!(update.department.as_deref(), Some(""));
        assert_eq!(update.phone.as_deref(), Some(""));
        assert_eq!(update.position.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_unset_field_left_blank_is_omitted() {
        let original = employee(1, None, None);
        let update = EmployeeForm::from_employee(&original)
            .to_update(&original)
            .unwrap();

        assert_eq!(update.department, None);
        assert_eq!(update.phone, None);
    }

    #[test]
    fn test_bad_salary_is_rejected() {
        let original = employee(1, None, None);
        let mut form = EmployeeForm::from_employee(&original);
        form.base_salary = "lots".into();

        assert_eq!(
            form.to_update(&original),
            Err("Base salary must be a number".to_string())
        );
    }
}
