//! Browser time source and local timezone offset.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use nova_chat::Clock;

/// Millisecond clock backed by `Date.now()` in the browser and the system
/// clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "csr")]
        {
            millis_from_js(js_sys::Date::now())
        }
        #[cfg(not(feature = "csr"))]
        {
            nova_chat::SystemClock.now_ms()
        }
    }
}

/// Minutes east of UTC for the browser's local zone; `0` outside the browser.
pub fn local_utc_offset_minutes() -> i32 {
    #[cfg(feature = "csr")]
    {
        offset_from_js(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis_from_js(ms: f64) -> u64 {
    if ms.is_finite() && ms > 0.0 { ms as u64 } else { 0 }
}

/// `getTimezoneOffset` counts minutes *behind* UTC, so UTC-3 reports `180`.
#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation)]
fn offset_from_js(minutes: f64) -> i32 {
    if !minutes.is_finite() || minutes.abs() > f64::from(24 * 60) {
        return 0;
    }
    -(minutes.round() as i32)
}
