use super::*;

#[test]
fn starts_hidden_without_fade() {
    let v = Visibility::new();
    assert_eq!(v.state(), VisibilityState::Hidden);
    assert!(v.pending().is_none());
}

#[test]
fn start_fade_enters_inactive_and_arms() {
    let mut v = Visibility::new();
    let ticket = v.start_fade(100, 1000);
    assert_eq!(v.state(), VisibilityState::Inactive);
    assert_eq!(ticket.due_ms, 1100);
    assert_eq!(ticket.after_ms, 1000);
    assert_eq!(v.pending(), Some(ticket));
}

#[test]
fn poll_before_due_keeps_inactive() {
    let mut v = Visibility::new();
    v.start_fade(0, 1000);
    assert!(!v.poll(999));
    assert_eq!(v.state(), VisibilityState::Inactive);
    assert!(v.poll(1000));
    assert_eq!(v.state(), VisibilityState::Hidden);
    assert!(v.pending().is_none());
}

#[test]
fn rearming_replaces_pending_fade() {
    let mut v = Visibility::new();
    let first = v.start_fade(0, 1000);
    let second = v.start_fade(500, 1000);
    assert_ne!(first.seq, second.seq);
    assert_eq!(v.pending(), Some(second));

    assert!(!v.expire(first));
    assert_eq!(v.state(), VisibilityState::Inactive);
    assert!(!v.poll(1200));
    assert!(v.expire(second));
    assert_eq!(v.state(), VisibilityState::Hidden);
}

#[test]
fn open_cancels_pending_fade() {
    let mut v = Visibility::new();
    let ticket = v.start_fade(0, 1000);
    assert_eq!(v.open(), Some(ticket));
    assert_eq!(v.state(), VisibilityState::Active);
    assert!(!v.expire(ticket));
    assert!(!v.poll(5000));
    assert_eq!(v.state(), VisibilityState::Active);
}

#[test]
fn show_temporary_is_noop_while_active() {
    let mut v = Visibility::new();
    v.open();
    assert!(v.show_temporary(0, 1000).is_none());
    assert_eq!(v.state(), VisibilityState::Active);
}

#[test]
fn show_temporary_from_hidden_and_inactive_rearms() {
    let mut v = Visibility::new();
    let first = v.show_temporary(0, 1000).expect("armed from hidden");
    let second = v.show_temporary(400, 1000).expect("armed from inactive");
    assert_eq!(v.state(), VisibilityState::Inactive);
    assert_eq!(second.due_ms, 1400);
    assert!(!v.expire(first));
}

#[test]
fn container_class_per_state() {
    assert_eq!(VisibilityState::Active.container_class(), "chat-container active");
    assert_eq!(VisibilityState::Inactive.container_class(), "chat-container inactive");
    assert_eq!(VisibilityState::Hidden.container_class(), "chat-container hidden");
}
