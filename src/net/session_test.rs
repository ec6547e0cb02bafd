use super::*;

// =============================================================
// Subscription lifecycle
// =============================================================

#[test]
fn subscription_starts_alive() {
    let sub = SessionSubscription::new();
    assert!(!sub.is_disposed());
}

#[test]
fn deliver_runs_while_alive() {
    let sub = SessionSubscription::new();
    let mut ran = false;
    assert!(sub.deliver(|| ran = true));
    assert!(ran);
}

#[test]
fn deliver_is_ignored_after_dispose() {
    let sub = SessionSubscription::new();
    sub.dispose();
    let mut ran = false;
    assert!(!sub.deliver(|| ran = true));
    assert!(!ran);
}

#[test]
fn dispose_runs_exactly_once() {
    let sub = SessionSubscription::new();
    assert!(sub.dispose());
    assert!(!sub.dispose());
    assert!(sub.is_disposed());
}

#[test]
fn clones_share_the_same_liveness() {
    let sub = SessionSubscription::new();
    let other = sub.clone();
    sub.dispose();
    assert!(other.is_disposed());
    assert!(!other.deliver(|| {}));
}
