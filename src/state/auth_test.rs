use super::*;

#[test]
fn auth_state_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn auth_state_holds_resolved_user() {
    let state = AuthState {
        user: Some(User {
            id: "u-1".to_owned(),
            email: "vibe@example.com".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(state.user.unwrap().email, "vibe@example.com");
}
