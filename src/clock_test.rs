use super::*;

#[test]
fn manual_clock_starts_where_told() {
    assert_eq!(ManualClock::new(500).now_ms(), 500);
    assert_eq!(ManualClock::default().now_ms(), 0);
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(0);
    let handle = clock.clone();
    handle.advance(250);
    assert_eq!(clock.now_ms(), 250);
    clock.set(10);
    assert_eq!(handle.now_ms(), 10);
}

#[test]
fn system_clock_is_past_2020() {
    assert!(SystemClock.now_ms() > 1_577_836_800_000);
}
