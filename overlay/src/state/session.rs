//! Session signal and effect runner.
//!
//! ERROR HANDLING
//! ==============
//! Effects that need the DOM silently no-op when the element is missing or
//! the crate is built without `csr`; the session state itself stays correct.

use leptos::prelude::*;
use nova_chat::{ChatSession, Effect};

use crate::util::clock::{self, BrowserClock};
use crate::util::{dom, timer};

/// The overlay's session, shared through context.
pub type SessionSignal = RwSignal<ChatSession<BrowserClock>>;

/// Create the session with the browser's local UTC offset applied.
pub fn new_session() -> SessionSignal {
    let mut session = ChatSession::new(BrowserClock);
    session.set_utc_offset_minutes(clock::local_utc_offset_minutes());
    RwSignal::new(session)
}

/// Run `f` against the session, then perform the effects it queued.
///
/// Returns `None` only when the signal has already been disposed.
pub fn with_session<R>(session: SessionSignal, f: impl FnOnce(&mut ChatSession<BrowserClock>) -> R) -> Option<R> {
    let mut out = None;
    let mut effects = Vec::new();
    session.update(|s| {
        out = Some(f(s));
        effects = s.drain_effects();
    });
    for effect in effects {
        perform(session, effect);
    }
    out
}

fn perform(session: SessionSignal, effect: Effect) {
    match effect {
        Effect::FocusInput => dom::focus_input(),
        Effect::BlurInput => dom::blur_input(),
        Effect::ScrollToBottom => dom::scroll_to_bottom(),
        Effect::ArmFade(ticket) => timer::arm_fade(ticket.after_ms, move || {
            if with_session(session, |s| s.fade_elapsed(ticket)) == Some(true) {
                leptos::logging::log!("chat faded out");
            }
        }),
        Effect::CancelFade => timer::cancel_fade(),
    }
}
