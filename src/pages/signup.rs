//! Signup page.

use dioxus::prelude::*;
use volt_ui::{Button, ButtonVariant};

use crate::account::SignupForm;
use crate::app::Route;
use crate::context::use_auth;

#[component]
pub fn Signup() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();
    let mut form = use_signal(SignupForm::default);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        let user = match form.peek().validate() {
            Ok(user) => user,
            Err(msg) => {
                error.set(Some(msg.to_string()));
                return;
            }
        };
        match auth.sign_in(user) {
            Ok(()) => {
                error.set(None);
                navigator.replace(Route::Dashboard {});
            }
            Err(e) => {
                tracing::error!("Sign up failed: {}", e);
                error.set(Some("Could not save your session. Please try again.".to_string()));
            }
        }
    };

    let SignupForm {
        first_name,
        last_name,
        email,
        password,
        confirm_password,
    } = form();

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create your account" }
                p { class: "auth-subtitle", "Start booking workspaces in minutes" }

                div { class: "input-row",
                    div {
                        label { class: "input-label", r#for: "signup-first", "First name" }
                        input {
                            id: "signup-first",
                            class: "input-field",
                            value: "{first_name}",
                            oninput: move |e| form.with_mut(|f| f.first_name = e.value()),
                        }
                    }
                    div {
                        label { class: "input-label", r#for: "signup-last", "Last name" }
                        input {
                            id: "signup-last",
                            class: "input-field",
                            value: "{last_name}",
                            oninput: move |e| form.with_mut(|f| f.last_name = e.value()),
                        }
                    }
                }

                label { class: "input-label", r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    class: "input-field",
                    r#type: "email",
                    value: "{email}",
                    placeholder: "you@company.com",
                    oninput: move |e| form.with_mut(|f| f.email = e.value()),
                }

                label { class: "input-label", r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    class: "input-field",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| form.with_mut(|f| f.password = e.value()),
                }

                label { class: "input-label", r#for: "signup-confirm", "Confirm password" }
                input {
                    id: "signup-confirm",
                    class: "input-field",
                    r#type: "password",
                    value: "{confirm_password}",
                    oninput: move |e| form.with_mut(|f| f.confirm_password = e.value()),
                }

                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                Button { onclick: submit, "Create account" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| { navigator.push(Route::Login {}); },
                    "Already have an account? Sign in"
                }
            }
        }
    }
}
