//! Panel visibility and the fade timer.
//!
//! DESIGN
//! ======
//! The controller owns at most one pending fade. Arming a new fade replaces
//! the previous ticket, and every ticket carries a sequence number, so a late
//! timer callback for a superseded ticket is recognized and ignored. Expiry
//! can be delivered by the callback (`expire`) or by polling (`poll`).

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use serde::Serialize;

/// Display state of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    /// Input shown and focused; no fade pending.
    Active,
    /// Feed visible, fade timer running.
    Inactive,
    /// Nothing visible.
    #[default]
    Hidden,
}

impl VisibilityState {
    /// Container class used by the overlay stylesheet.
    #[must_use]
    pub fn container_class(self) -> &'static str {
        match self {
            Self::Active => "chat-container active",
            Self::Inactive => "chat-container inactive",
            Self::Hidden => "chat-container hidden",
        }
    }
}

/// Handle for one armed fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTicket {
    pub seq: u64,
    /// Delay the timer was armed with.
    pub after_ms: u64,
    /// Clock time at which the fade is due.
    pub due_ms: u64,
}

/// Visibility state machine with a single cancellable fade.
#[derive(Clone, Debug, Default)]
pub struct Visibility {
    state: VisibilityState,
    pending: Option<FadeTicket>,
    next_seq: u64,
}

impl Visibility {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == VisibilityState::Active
    }

    #[must_use]
    pub fn pending(&self) -> Option<FadeTicket> {
        self.pending
    }

    /// Enter `Active`. Returns the fade that was cancelled, if any.
    pub fn open(&mut self) -> Option<FadeTicket> {
        self.state = VisibilityState::Active;
        self.cancel()
    }

    /// Drop the pending fade without changing state.
    pub fn cancel(&mut self) -> Option<FadeTicket> {
        self.pending.take()
    }

    /// Enter `Inactive` and arm a fade that hides the panel after
    /// `timeout_ms`, replacing any pending one.
    pub fn start_fade(&mut self, now_ms: u64, timeout_ms: u64) -> FadeTicket {
        self.cancel();
        self.state = VisibilityState::Inactive;
        self.next_seq += 1;
        let ticket = FadeTicket { seq: self.next_seq, after_ms: timeout_ms, due_ms: now_ms.saturating_add(timeout_ms) };
        self.pending = Some(ticket);
        tracing::debug!(seq = ticket.seq, due_ms = ticket.due_ms, "fade armed");
        ticket
    }

    /// Briefly show the panel without focus. No-op while `Active`.
    pub fn show_temporary(&mut self, now_ms: u64, timeout_ms: u64) -> Option<FadeTicket> {
        if self.is_active() {
            return None;
        }
        Some(self.start_fade(now_ms, timeout_ms))
    }

    /// Timer callback for `ticket`. Hides the panel only when `ticket` is the
    /// one still pending.
    pub fn expire(&mut self, ticket: FadeTicket) -> bool {
        if self.pending.map(|p| p.seq) != Some(ticket.seq) {
            tracing::debug!(seq = ticket.seq, "stale fade ignored");
            return false;
        }
        self.hide();
        true
    }

    /// Hide the panel if the pending fade is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(ticket) if ticket.due_ms <= now_ms => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    fn hide(&mut self) {
        self.pending = None;
        self.state = VisibilityState::Hidden;
        tracing::debug!("panel hidden");
    }
}
