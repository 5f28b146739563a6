//! New booking form.

use chrono::Local;
use dioxus::prelude::*;
use volt_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::bookings::{BookingDraft, WORKSPACES};
use crate::context::use_bookings;

#[component]
pub fn NewBooking() -> Element {
    let navigator = use_navigator();
    let mut ledger = use_bookings();
    let mut draft = use_signal(|| BookingDraft {
        workspace: WORKSPACES[0].to_string(),
        ..BookingDraft::default()
    });
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);

    let submit = move |_| {
        let today = Local::now().date_naive();
        let result = ledger.with_mut(|l| l.add(&draft.peek(), today).map(|b| b.id));
        match result {
            Ok(id) => {
                tracing::debug!(id, "Booking form submitted");
                error.set(None);
                navigator.push(Route::Bookings {});
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let BookingDraft {
        workspace,
        title,
        date,
        start,
        end,
        attendees,
    } = draft();

    rsx! {
        section { class: "bookings",
            h2 { class: "page-title", "New booking" }

            div { class: "booking-form",
                label { class: "input-label", r#for: "booking-workspace", "Workspace" }
                select {
                    id: "booking-workspace",
                    class: "input-field",
                    value: "{workspace}",
                    onchange: move |e| draft.with_mut(|d| d.workspace = e.value()),
                    for name in WORKSPACES.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }

                label { class: "input-label", r#for: "booking-title", "Title" }
                input {
                    id: "booking-title",
                    class: "input-field",
                    value: "{title}",
                    placeholder: "Team sync",
                    oninput: move |e| draft.with_mut(|d| d.title = e.value()),
                }

                label { class: "input-label", r#for: "booking-date", "Date" }
                input {
                    id: "booking-date",
                    class: "input-field",
                    r#type: "date",
                    value: "{date}",
                    oninput: move |e| draft.with_mut(|d| d.date = e.value()),
                }

                div { class: "input-row",
                    div {
                        label { class: "input-label", r#for: "booking-start", "Start" }
                        input {
                            id: "booking-start",
                            class: "input-field",
                            r#type: "time",
                            value: "{start}",
                            oninput: move |e| draft.with_mut(|d| d.start = e.value()),
                        }
                    }
                    div {
                        label { class: "input-label", r#for: "booking-end", "End" }
                        input {
                            id: "booking-end",
                            class: "input-field",
                            r#type: "time",
                            value: "{end}",
                            oninput: move |e| draft.with_mut(|d| d.end = e.value()),
                        }
                    }
                }

                label { class: "input-label", r#for: "booking-attendees", "Attendees (comma separated)" }
                input {
                    id: "booking-attendees",
                    class: "input-field",
                    value: "{attendees}",
                    placeholder: "grace@company.com, alan@company.com",
                    oninput: move |e| draft.with_mut(|d| d.attendees = e.value()),
                }

                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                Button { onclick: submit, "Book workspace" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| { navigator.push(Route::Bookings {}); },
                    "Cancel"
                }
            }
        }
    }
}
