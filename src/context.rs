//! Auth context for Volt.
//!
//! The authentication observation is a `Signal<AuthState>` provided by
//! [`App`](crate::app::App). Pages read it through [`use_auth`]; only the
//! methods on [`Auth`] mutate it.
//!
//! ## Usage
//!
//! ```ignore
//! let auth = use_auth();
//! if let Some(user) = auth.user() {
//!     // ...
//! }
//! auth.sign_out();
//! ```

use dioxus::prelude::*;
use volt_core::{AppConfig, AuthState, ProfileUpdate, UserRef};

use crate::bookings::BookingLedger;

/// Get the application configuration.
pub fn app_config() -> &'static AppConfig {
    crate::app_config()
}

/// Handle to the shared authentication observation.
#[derive(Clone, Copy, PartialEq)]
pub struct Auth {
    state: Signal<AuthState>,
}

impl Auth {
    pub fn new(state: Signal<AuthState>) -> Self {
        Self { state }
    }

    /// Current observation. Subscribes the caller to changes.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<UserRef> {
        self.state.read().user.clone()
    }

    /// Finish the initial loading phase.
    pub fn resolve(mut self, user: Option<UserRef>) {
        self.state.set(AuthState::resolved(user));
    }

    /// Persist `user` as the active session and publish it.
    pub fn sign_in(mut self, user: UserRef) -> volt_core::Result<()> {
        app_config().session_store().save(&user)?;
        tracing::info!(user = %user.id, "Signed in");
        self.state.set(AuthState::resolved(Some(user)));
        Ok(())
    }

    /// Drop the session. The observation always ends up signed out, even
    /// if the session file could not be removed.
    pub fn sign_out(mut self) {
        if let Err(e) = app_config().session_store().clear() {
            tracing::error!("Failed to clear session: {}", e);
        }
        tracing::info!("Signed out");
        self.state.set(AuthState::signed_out());
    }

    /// Apply a profile edit to the signed-in user and persist it.
    pub fn update_profile(mut self, update: ProfileUpdate) -> volt_core::Result<()> {
        let Some(mut user) = self.state.peek().user.clone() else {
            return Ok(());
        };
        user.merge_profile(update);
        app_config().session_store().save(&user)?;
        self.state.set(AuthState::resolved(Some(user)));
        Ok(())
    }
}

/// Hook to access the auth observation from context.
pub fn use_auth() -> Auth {
    Auth::new(use_context::<Signal<AuthState>>())
}

/// Hook to access this session's bookings.
pub fn use_bookings() -> Signal<BookingLedger> {
    use_context::<Signal<BookingLedger>>()
}
