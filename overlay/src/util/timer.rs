//! The single fade timer.
//!
//! At most one `Timeout` is alive. Arming replaces it and dropping a
//! `Timeout` clears the underlying `setTimeout`, so a superseded fade never
//! fires. The session additionally ignores stale tickets.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use std::cell::RefCell;

#[cfg(feature = "csr")]
thread_local! {
    static FADE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Start the fade timer, replacing any running one.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn arm_fade(after_ms: u64, on_fire: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        let timeout = Timeout::new(delay_ms(after_ms), on_fire);
        FADE_TIMER.with(|slot| *slot.borrow_mut() = Some(timeout));
    }
}

/// Stop the running fade timer, if any.
pub fn cancel_fade() {
    #[cfg(feature = "csr")]
    FADE_TIMER.with(|slot| {
        if let Some(timeout) = slot.borrow_mut().take() {
            drop(timeout.cancel());
        }
    });
}

/// Browsers store the `setTimeout` delay as a signed 32-bit value and fire
/// immediately on overflow.
#[cfg(any(test, feature = "csr"))]
const MAX_DELAY_MS: u32 = i32::MAX.unsigned_abs();

/// Longer fades are clamped to [`MAX_DELAY_MS`].
#[cfg(any(test, feature = "csr"))]
fn delay_ms(after_ms: u64) -> u32 {
    u32::try_from(after_ms).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}
