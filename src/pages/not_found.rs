use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route for {}", path);

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Page not found" }
                p { class: "auth-subtitle", "Nothing lives at {path}." }
                Link { class: "btn btn-primary", to: Route::Landing {}, "Go home" }
            }
        }
    }
}
