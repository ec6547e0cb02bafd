use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let a = state.push_success("Board created!");
    let b = state.push_error("Failed to upload image");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_preserves_kind_and_message() {
    let mut state = ToastState::default();
    state.push_error("Failed to upload image");
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].message, "Failed to upload image");
}

#[test]
fn dismiss_removes_only_the_target_toast() {
    let mut state = ToastState::default();
    let a = state.push_success("one");
    let b = state.push_success("two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push_success("one");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push_success("one");
    state.dismiss(a);
    let b = state.push_success("two");
    assert!(b > a);
}
