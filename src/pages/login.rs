//! Login page.

use dioxus::prelude::*;
use volt_ui::{Button, ButtonVariant};

use crate::account::login_user;
use crate::app::Route;
use crate::context::use_auth;

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        let user = match login_user(&email(), &name()) {
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
                tracing::error!("Sign in failed: {}", e);
                error.set(Some("Could not save your session. Please try again.".to_string()));
            }
        }
    };

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Welcome back" }
                p { class: "auth-subtitle", "Sign in to manage your bookings" }

                label { class: "input-label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "input-field",
                    r#type: "email",
                    value: "{email}",
                    placeholder: "you@company.com",
                    oninput: move |e| email.set(e.value()),
                }

                label { class: "input-label", r#for: "login-name", "Name (optional)" }
                input {
                    id: "login-name",
                    class: "input-field",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }

                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                Button { onclick: submit, "Sign in" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| { navigator.push(Route::Signup {}); },
                    "Create an account"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| { navigator.push(Route::Landing {}); },
                    "Back to home"
                }
            }
        }
    }
}
