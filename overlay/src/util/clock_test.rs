use super::*;

#[test]
fn millis_from_js_truncates_fraction() {
    assert_eq!(millis_from_js(1_700_000_000_123.9), 1_700_000_000_123);
}

#[test]
fn millis_from_js_rejects_garbage() {
    assert_eq!(millis_from_js(f64::NAN), 0);
    assert_eq!(millis_from_js(-5.0), 0);
    assert_eq!(millis_from_js(f64::INFINITY), 0);
}

#[test]
fn offset_from_js_flips_sign() {
    assert_eq!(offset_from_js(180.0), -180);
    assert_eq!(offset_from_js(-330.0), 330);
    assert_eq!(offset_from_js(0.0), 0);
}

#[test]
fn offset_from_js_ignores_out_of_range() {
    assert_eq!(offset_from_js(f64::NAN), 0);
    assert_eq!(offset_from_js(5_000.0), 0);
}

#[test]
fn browser_clock_advances_outside_browser() {
    assert!(BrowserClock.now_ms() > 0);
}
