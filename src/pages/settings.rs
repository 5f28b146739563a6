//! Settings page: profile edit and sign-out.

use dioxus::prelude::*;
use volt_ui::{Button, ButtonVariant};

use crate::account::profile_update;
use crate::context::use_auth;

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let current = auth.user();

    let mut name = use_signal(|| {
        current
            .as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_default()
    });
    let mut email = use_signal(|| current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut status: Signal<Option<&'static str>> = use_signal(|| None);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);

    let save = move |_| {
        status.set(None);
        let update = match profile_update(&name(), &email()) {
            Ok(update) => update,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        match auth.update_profile(update) {
            Ok(()) => {
                error.set(None);
                status.set(Some("Profile saved"));
            }
            Err(e) => {
                tracing::error!("Profile update failed: {}", e);
                error.set(Some("Could not save your profile"));
            }
        }
    };

    rsx! {
        section { class: "settings",
            h2 { class: "page-title", "Settings" }

            div { class: "settings-card",
                h3 { "Profile" }
                label { class: "input-label", r#for: "settings-name", "Name" }
                input {
                    id: "settings-name",
                    class: "input-field",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                label { class: "input-label", r#for: "settings-email", "Email" }
                input {
                    id: "settings-email",
                    class: "input-field",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }
                if let Some(msg) = status() {
                    p { class: "form-status", "{msg}" }
                }
                Button { onclick: save, "Save changes" }
            }

            div { class: "settings-card",
                h3 { "Session" }
                p { "Signing out returns you to the login page." }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| auth.sign_out(),
                    "Sign out"
                }
            }
        }
    }
}
