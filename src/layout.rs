//! Dashboard layout behind the auth guard.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use volt_core::{GuardView, LayoutGuard};
use volt_ui::LoadingAnimation;

use crate::app::Route;
use crate::components::{DashboardHeader, Sidebar};
use crate::context::use_auth;

/// Wraps every `/dashboard` route.
///
/// Shows the loading indicator until the session resolves, sends signed
/// out visitors to the login page once, and otherwise renders the
/// dashboard chrome around the current page.
#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let guard = use_hook(|| Rc::new(RefCell::new(LayoutGuard::new())));

    // Re-runs on every change of the auth observation
    use_effect(move || {
        let state = auth.state();
        let decision = guard.borrow_mut().observe(&state);
        if let Some(path) = decision.redirect {
            tracing::debug!(path, "Guard redirect");
            navigator.replace(Route::Login {});
        }
    });

    match GuardView::for_state(&auth.state()) {
        GuardView::Loading => rsx! {
            div { class: "guard-loading", LoadingAnimation {} }
        },
        GuardView::Redirecting => rsx! {},
        GuardView::Content => rsx! {
            div { class: "dashboard-shell",
                Sidebar {}
                div { class: "dashboard-main",
                    DashboardHeader {}
                    main { class: "dashboard-page", Outlet::<Route> {} }
                }
            }
        },
    }
}
