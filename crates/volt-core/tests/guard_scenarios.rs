//! Auth guard scenarios across a session's lifetime.

use volt_core::{AuthState, GuardView, LayoutGuard, UserRef, LOGIN_PATH};

#[test]
fn layout_guard_scenario() {
    let mut guard = LayoutGuard::new();
    let mut navigations = Vec::new();

    for state in [
        AuthState::default(),
        AuthState::signed_out(),
        AuthState::signed_out(),
    ] {
        let decision = guard.observe(&state);
        navigations.extend(decision.redirect);
    }
    assert_eq!(navigations, vec![LOGIN_PATH]);

    let mut guard = LayoutGuard::new();
    assert_eq!(guard.observe(&AuthState::default()).view, GuardView::Loading);
    let signed_in = guard.observe(&AuthState::resolved(Some(UserRef::new("u1", "u1@example.com"))));
    assert_eq!(signed_in.view, GuardView::Content);
    assert_eq!(signed_in.redirect, None);
}
