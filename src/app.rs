use chrono::Local;
use dioxus::prelude::*;
use volt_core::AuthState;

use crate::bookings::BookingLedger;
use crate::context::{app_config, Auth};
use crate::layout::DashboardLayout;
use crate::pages::{
    Bookings, Chat, Dashboard, Landing, Login, NewBooking, NotFound, Settings, Signup,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Marketing landing page
/// - `/login` - Sign in
/// - `/signup` - Create an account
/// - `/dashboard/...` - Pages behind the auth guard
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            Dashboard {},
            #[route("/bookings")]
            Bookings {},
            #[route("/bookings/new")]
            NewBooking {},
            #[route("/chat")]
            Chat {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the auth observation, the session's bookings,
/// and routing.
#[component]
pub fn App() -> Element {
    let auth_state: Signal<AuthState> = use_signal(AuthState::default);
    use_context_provider(|| auth_state);
    let auth = Auth::new(auth_state);
    let bookings = use_signal(|| BookingLedger::sample(Local::now().date_naive()));
    use_context_provider(|| bookings);

    // Resolve the stored session once on startup
    use_hook(move || {
        spawn(async move {
            let store = app_config().session_store();
            let user = match store.load() {
                Ok(user) => user,
                Err(e) => {
                    tracing::error!("Discarding unreadable session: {}", e);
                    if let Err(e) = store.clear() {
                        tracing::warn!("Failed to remove session file: {}", e);
                    }
                    None
                }
            };
            tracing::info!(signed_in = user.is_some(), "Session resolved");
            auth.resolve(user);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
