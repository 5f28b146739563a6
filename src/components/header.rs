//! Dashboard Header Component

use chrono::{Local, Timelike};
use dioxus::prelude::*;

use crate::context::use_auth;

/// Greeting for the given hour of the day.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[component]
pub fn DashboardHeader() -> Element {
    let auth = use_auth();
    let name = auth
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let now = Local::now();
    let greeting = greeting_for_hour(now.hour());
    let date = now.format("%A, %B %-d").to_string();

    rsx! {
        header { class: "dashboard-header",
            div {
                h1 { class: "header-greeting", "{greeting}, {name}" }
                p { class: "header-date", "{date}" }
            }
        }
    }
}
