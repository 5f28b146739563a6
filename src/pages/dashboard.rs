//! Dashboard overview page.

use dioxus::prelude::*;
use volt_ui::TypewriterText;

use crate::app::Route;
use crate::context::{use_auth, use_bookings};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let ledger = use_bookings();
    let (upcoming_count, total_count) = {
        let ledger = ledger.read();
        (ledger.upcoming().count(), ledger.len())
    };
    let intro = format!("Welcome back, {name}. Here's what's happening with your workspaces.");

    rsx! {
        section { class: "overview",
            p { class: "overview-intro", TypewriterText { text: intro } }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-value", "{upcoming_count}" }
                    span { class: "stat-label", "Upcoming bookings" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{total_count}" }
                    span { class: "stat-label", "Total bookings" }
                }
            }

            div { class: "quick-links",
                Link { class: "btn btn-primary", to: Route::Bookings {}, "View bookings" }
                Link { class: "btn btn-outline", to: Route::NewBooking {}, "Book a workspace" }
                Link { class: "btn btn-outline", to: Route::Chat {}, "Ask the assistant" }
            }
        }
    }
}
