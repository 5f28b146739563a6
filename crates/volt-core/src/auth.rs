//! Authentication observation and the dashboard layout guard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where unauthenticated sessions are sent.
pub const LOGIN_PATH: &str = "/login";

/// Access/refresh token pair issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// The signed-in user as seen by the front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tokens: Option<AuthTokens>,
    pub signed_in_at: DateTime<Utc>,
}

impl UserRef {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: None,
            tokens: None,
            signed_in_at: Utc::now(),
        }
    }

    /// Name to greet the user with, falling back to the email local part.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    /// Apply a profile edit. Empty fields leave the old value in place.
    pub fn merge_profile(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(email) = update.email.filter(|e| !e.trim().is_empty()) {
            self.email = email;
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access.as_str())
    }
}

/// Partial profile edit from the settings page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Externally owned authentication observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserRef>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Nothing resolved yet.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn resolved(user: Option<UserRef>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::resolved(None)
    }
}

/// What the protected layout should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Auth still resolving: loading indicator only
    Loading,
    /// No user: render nothing while navigating away
    Redirecting,
    /// Signed in: header, sidebar and page body
    Content,
}

impl GuardView {
    pub fn for_state(state: &AuthState) -> Self {
        if state.loading {
            GuardView::Loading
        } else if state.user.is_none() {
            GuardView::Redirecting
        } else {
            GuardView::Content
        }
    }
}

/// Result of feeding one observation to the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    pub view: GuardView,
    /// Path to navigate to. Set at most once per unauthenticated resolution.
    pub redirect: Option<&'static str>,
}

/// Per-layout redirect latch.
///
/// The view is a pure function of the observation; the latch makes sure
/// repeated observations of the same signed-out state navigate only once.
/// Seeing a user or a new loading phase re-arms it.
#[derive(Clone, Debug, Default)]
pub struct LayoutGuard {
    redirected: bool,
}

impl LayoutGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, state: &AuthState) -> GuardDecision {
        let view = GuardView::for_state(state);
        let redirect = match view {
            GuardView::Redirecting if !self.redirected => {
                self.redirected = true;
                tracing::info!("No authenticated user, redirecting to {}", LOGIN_PATH);
                Some(LOGIN_PATH)
            }
            GuardView::Redirecting => None,
            GuardView::Loading | GuardView::Content => {
                self.redirected = false;
                None
            }
        };
        GuardDecision { view, redirect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserRef {
        UserRef::new(id, format!("{id}@example.com"))
    }

    #[test]
    fn loading_shows_indicator_without_redirect() {
        let mut guard = LayoutGuard::new();
        let d = guard.observe(&AuthState::default());
        assert_eq!(d.view, GuardView::Loading);
        assert_eq!(d.redirect, None);
    }

    #[test]
    fn signed_out_redirects_exactly_once() {
        let mut guard = LayoutGuard::new();
        guard.observe(&AuthState::default());

        let first = guard.observe(&AuthState::signed_out());
        assert_eq!(first.view, GuardView::Redirecting);
        assert_eq!(first.redirect, Some(LOGIN_PATH));

        let again = guard.observe(&AuthState::signed_out());
        assert_eq!(again.view, GuardView::Redirecting);
        assert_eq!(again.redirect, None);
    }

    #[test]
    fn signed_in_renders_content() {
        let mut guard = LayoutGuard::new();
        let d = guard.observe(&AuthState::resolved(Some(user("u1"))));
        assert_eq!(d.view, GuardView::Content);
        assert_eq!(d.redirect, None);
    }

    #[test]
    fn sign_out_after_content_redirects_again() {
        let mut guard = LayoutGuard::new();
        guard.observe(&AuthState::signed_out());
        guard.observe(&AuthState::resolved(Some(user("u1"))));

        let d = guard.observe(&AuthState::signed_out());
        assert_eq!(d.redirect, Some(LOGIN_PATH));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut u = user("ada");
        assert_eq!(u.display_name(), "ada");
        u.name = Some("Ada Lovelace".into());
        assert_eq!(u.display_name(), "Ada Lovelace");
    }

    #[test]
    fn merge_profile_ignores_blank_email() {
        let mut u = user("ada");
        u.merge_profile(ProfileUpdate {
            name: Some("Ada".into()),
            email: Some("  ".into()),
        });
        assert_eq!(u.name.as_deref(), Some("Ada"));
        assert_eq!(u.email, "ada@example.com");
    }
}
