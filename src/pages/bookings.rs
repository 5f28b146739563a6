//! Bookings page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_bookings;

#[component]
pub fn Bookings() -> Element {
    let ledger = use_bookings();
    let rows: Vec<(u32, String, String, String, &str)> = ledger
        .read()
        .all()
        .iter()
        .map(|b| {
            (
                b.id,
                b.workspace.clone(),
                b.title.clone(),
                b.when(),
                b.status.label(),
            )
        })
        .collect();
    let empty = rows.is_empty();

    rsx! {
        section { class: "bookings",
            div { class: "bookings-header",
                h2 { class: "page-title", "Your bookings" }
                Link { class: "btn btn-primary", to: Route::NewBooking {}, "New booking" }
            }
            if empty {
                p { class: "booking-empty", "No bookings yet." }
            }
            ul { class: "booking-list",
                for (id, workspace, title, when, status) in rows {
                    li { key: "{id}", class: "booking-row",
                        div {
                            span { class: "booking-space", "{workspace}" }
                            p { class: "booking-title", "{title}" }
                        }
                        span { class: "booking-when", "{when}" }
                        span { class: "badge badge-{status}", "{status}" }
                    }
                }
            }
        }
    }
}
