//! The chat session: one owned object holding everything the overlay knows.
//!
//! DESIGN
//! ======
//! `ChatSession` replaces the page-level globals of a browser script with a
//! single value and explicit methods. It never performs I/O. Outbound events
//! are returned to the caller; imperative UI work (focus, scroll, timers) is
//! queued as [`Effect`]s that the frontend drains and performs after each
//! call. All time comes from the injected [`Clock`].
//!
//! Handlers run to completion one at a time, so the only ordering hazard is
//! the fade timer; every path that supersedes it cancels or replaces the
//! ticket first.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::catalog::{self, Command};
use crate::clock::Clock;
use crate::config::{ChatConfig, ConfigField, ConfigPatch};
use crate::feed::{FeedEntry, MessageFeed};
use crate::format;
use crate::input::{InputRouter, PrefixIndicator, Progress, Submission};
use crate::message::ChatMessage;
use crate::protocol::{HostEvent, OutgoingEvent};
use crate::suggest;
use crate::visibility::{FadeTicket, Visibility, VisibilityState};

/// UI work the frontend performs on the session's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    FocusInput,
    BlurInput,
    /// Scroll the feed to its newest message on the next frame.
    ScrollToBottom,
    /// Start a timer; when it fires call [`ChatSession::fade_elapsed`].
    ArmFade(FadeTicket),
    /// Drop the running fade timer, if any.
    CancelFade,
}

/// Keys the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Backspace,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "Backspace" => Self::Backspace,
            _ => Self::Other,
        }
    }
}

/// Complete overlay state.
#[derive(Debug)]
pub struct ChatSession<C: Clock> {
    clock: C,
    config: ChatConfig,
    visibility: Visibility,
    feed: MessageFeed,
    input: InputRouter,
    suggestions: Vec<Command>,
    utc_offset_minutes: i32,
    effects: Vec<Effect>,
}

impl<C: Clock> ChatSession<C> {
    /// A hidden, empty session with default settings.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, ChatConfig::default())
    }

    pub fn with_config(clock: C, config: ChatConfig) -> Self {
        Self {
            clock,
            feed: MessageFeed::new(config.max_messages),
            input: InputRouter::new(config.max_length),
            config,
            visibility: Visibility::new(),
            suggestions: Vec::new(),
            utc_offset_minutes: 0,
            effects: Vec::new(),
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.visibility.state()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.visibility.is_active()
    }

    #[must_use]
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    #[must_use]
    pub fn feed(&self) -> &MessageFeed {
        &self.feed
    }

    pub fn messages(&self) -> impl Iterator<Item = &FeedEntry> {
        self.feed.iter()
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    #[must_use]
    pub fn input_focused(&self) -> bool {
        self.input.is_focused()
    }

    #[must_use]
    pub fn prefix(&self) -> Option<PrefixIndicator> {
        self.input.prefix()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.input.progress()
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        self.input.can_send()
    }

    /// Current dropdown entries; empty means the dropdown is hidden.
    #[must_use]
    pub fn suggestions(&self) -> &[Command] {
        &self.suggestions
    }

    #[must_use]
    pub fn pending_fade(&self) -> Option<FadeTicket> {
        self.visibility.pending()
    }

    /// Offset applied when formatting message times.
    pub fn set_utc_offset_minutes(&mut self, minutes: i32) {
        self.utc_offset_minutes = minutes;
    }

    /// Hand over queued effects, oldest first.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // =========================================================================
    // HOST EVENTS
    // =========================================================================

    /// Apply one inbound host event.
    pub fn handle(&mut self, event: HostEvent) {
        tracing::debug!(action = event.action(), "host event");
        match event {
            HostEvent::Open => self.open(),
            HostEvent::Close => self.close(),
            HostEvent::AddMessage { message } => self.add_message(message),
            HostEvent::AddMessages { messages } => {
                for message in messages {
                    self.add_message(message);
                }
            }
            HostEvent::ClearMessages => self.clear_messages(),
            HostEvent::Config(patch) => self.apply_config(&patch),
        }
    }

    /// Show the input and take keyboard focus.
    pub fn open(&mut self) {
        if self.visibility.open().is_some() {
            self.effects.push(Effect::CancelFade);
        }
        self.input.focus();
        self.effects.push(Effect::FocusInput);
        self.effects.push(Effect::ScrollToBottom);
    }

    /// Hide the input, discard the draft and start fading out.
    pub fn close(&mut self) {
        self.input.close();
        self.suggestions.clear();
        self.effects.push(Effect::BlurInput);
        let ticket = self.visibility.start_fade(self.clock.now_ms(), self.config.fade_timeout_ms);
        self.effects.push(Effect::ArmFade(ticket));
    }

    /// Append a message to the feed. Outside `Active` the panel is shown
    /// briefly without focus.
    pub fn add_message(&mut self, message: ChatMessage) {
        let node = format::render(&message, self.utc_offset_minutes);
        self.feed.append(message, node);
        self.effects.push(Effect::ScrollToBottom);
        if let Some(ticket) = self
            .visibility
            .show_temporary(self.clock.now_ms(), self.config.fade_timeout_ms)
        {
            self.effects.push(Effect::ArmFade(ticket));
        }
    }

    /// Empty the feed. Visibility is left alone.
    pub fn clear_messages(&mut self) {
        self.feed.clear();
    }

    /// Merge a partial config from the host.
    pub fn apply_config(&mut self, patch: &ConfigPatch) {
        let changed = self.config.apply(patch);
        for field in &changed {
            match field {
                ConfigField::MaxMessages => {
                    self.feed.set_capacity(self.config.max_messages);
                }
                ConfigField::MaxLength => {
                    self.input.set_max_length(self.config.max_length);
                    self.refresh_suggestions();
                }
                ConfigField::Commands => self.refresh_suggestions(),
                ConfigField::FadeTimeout | ConfigField::ShowTimestamps => {}
            }
        }
        tracing::debug!(?changed, "config merged");
    }

    // =========================================================================
    // TIMERS
    // =========================================================================

    /// Timer callback for a fade armed through [`Effect::ArmFade`].
    /// Returns whether the panel was hidden.
    pub fn fade_elapsed(&mut self, ticket: FadeTicket) -> bool {
        self.visibility.expire(ticket)
    }

    /// Poll the clock and hide the panel if the pending fade is due.
    pub fn tick(&mut self) -> bool {
        self.visibility.poll(self.clock.now_ms())
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Keystroke: replace the draft and refresh everything derived from it.
    pub fn set_input(&mut self, text: &str) {
        self.input.set_text(text);
        self.refresh_suggestions();
    }

    pub fn focus_input(&mut self) {
        self.input.focus();
    }

    pub fn blur_input(&mut self) {
        self.input.blur();
    }

    /// Submit the draft. Returns the event to post to the host, or `None`
    /// when the draft was blank.
    pub fn submit(&mut self) -> Option<OutgoingEvent> {
        let submission = self.input.submit()?;
        self.suggestions.clear();
        Some(match submission {
            Submission::Chat { message, kind } => OutgoingEvent::SendMessage { message, kind },
            Submission::Native { command } => OutgoingEvent::ExecuteCommand { command },
        })
    }

    /// Key press while the panel is shown. Escape, and Backspace on an empty
    /// draft, ask the host to close the panel.
    pub fn key_down(&mut self, key: Key) -> Option<OutgoingEvent> {
        if !self.is_active() {
            return None;
        }
        match key {
            Key::Escape => Some(OutgoingEvent::Close),
            Key::Backspace if self.input.text().is_empty() => Some(OutgoingEvent::Close),
            Key::Backspace | Key::Other => None,
        }
    }

    /// Pick the suggestion at `index`: fill the input with its token and a
    /// trailing space, refocus and close the dropdown. Does not submit.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(command) = self.suggestions.get(index) else {
            return false;
        };
        let text = suggest::completion(command);
        self.input.set_text(&text);
        self.suggestions.clear();
        self.effects.push(Effect::FocusInput);
        true
    }

    fn refresh_suggestions(&mut self) {
        let catalog = catalog::active_catalog(&self.config.commands);
        self.suggestions = suggest::suggest(self.input.text(), catalog)
            .into_iter()
            .cloned()
            .collect();
    }
}
