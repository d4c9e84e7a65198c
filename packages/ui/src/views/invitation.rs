//! Public page reached from the invitation email.

use api::models::{InvitationAcceptance, InvitationPreview};
use chrono::NaiveDate;
use dioxus::prelude::*;
use tracing::error;

use super::format::{self, non_empty};
use super::ErrorBanner;
use crate::{use_api, Route};

#[component]
pub fn InvitationAccept(token: String) -> Element {
    let api = use_api();

    // Re-validate when another invitation link is followed in place.
    let preview = use_resource(use_reactive((&token,), move |(token,)| {
        let api = api.clone();
        async move { api.invitations().validate(&token).await }
    }));

    let body = match &*preview.read() {
        None => rsx! { p { class: "muted", "Checking invitation..." } },
        Some(Err(e)) => rsx! {
            ErrorBanner { message: e.message() }
            Link { to: Route::Login {}, class: "btn btn-secondary", "Go to sign in" }
        },
        Some(Ok(preview)) => rsx! {
            AcceptForm { key: "{token}", token: token.clone(), preview: preview.clone() }
        },
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card wide",
                h1 { "Join the team" }
                {body}
            }
        }
    }
}

#[component]
fn AcceptForm(token: String, preview: InvitationPreview) -> Element {
    let api = use_api();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut date_of_birth = use_signal(String::new);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut accepted = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let api = api.clone();
        let token = token.clone();
        async move {
            failure.set(None);
            if password() != confirm() {
                failure.set(Some("Passwords do not match".to_string()));
                return;
            }
            if first_name().trim().is_empty() || last_name().trim().is_empty() {
                failure.set(Some("First and last name are required".to_string()));
                return;
            }
            let date_of_birth = match non_empty(date_of_birth()) {
                None => None,
                Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(_) => {
                        failure.set(Some("Date of birth must be YYYY-MM-DD".to_string()));
                        return;
                    }
                },
            };
            let acceptance = InvitationAcceptance {
                token,
                username: username().trim().to_string(),
                password: password(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                phone: non_empty(phone()),
                address: non_empty(address()),
                date_of_birth,
            };
            match api.invitations().accept(&acceptance).await {
                Ok(_) => accepted.set(true),
                Err(e) => {
                    error!(error = %e, "invitation acceptance failed");
                    failure.set(Some(e.message()));
                }
            }
        }
    };

    if accepted() {
        return rsx! {
            div { class: "alert alert-success", "Your account is ready. You can now sign in." }
            Link { to: Route::Login {}, class: "btn btn-primary", "Sign in" }
        };
    }

    let position = format::text(&preview.position);
    let department = format::text(&preview.department);
    let start = format::date(Some(preview.hire_date));
    let expires = preview.expires_at.format("%b %-d, %Y %H:%M UTC").to_string();

    rsx! {
        dl {
            class: "details",
            dt { "Email" } dd { "{preview.email}" }
            dt { "Employee ID" } dd { "{preview.employee_id}" }
            dt { "Position" } dd { "{position}" }
            dt { "Department" } dd { "{department}" }
            dt { "Start date" } dd { "{start}" }
            dt { "Link expires" } dd { "{expires}" }
        }

        form {
            class: "stacked-form",
            onsubmit: onsubmit,

            if let Some(message) = failure() {
                ErrorBanner { message }
            }

            label { "First name" }
            input { value: "{first_name}", oninput: move |e| first_name.set(e.value()) }
            label { "Last name" }
            input { value: "{last_name}", oninput: move |e| last_name.set(e.value()) }
            label { "Username" }
            input { autocomplete: "username", value: "{username}", oninput: move |e| username.set(e.value()) }
            label { "Password" }
            input { r#type: "password", autocomplete: "new-password", value: "{password}", oninput: move |e| password.set(e.value()) }
            label { "Confirm password" }
            input { r#type: "password", autocomplete: "new-password", value: "{confirm}", oninput: move |e| confirm.set(e.value()) }
            label { "Phone (optional)" }
            input { r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }
            label { "Address (optional)" }
            input { value: "{address}", oninput: move |e| address.set(e.value()) }
            label { "Date of birth (optional)" }
            input { r#type: "date", value: "{date_of_birth}", oninput: move |e| date_of_birth.set(e.value()) }

            button { class: "btn btn-primary", r#type: "submit", "Create account" }
        }
    }
}
