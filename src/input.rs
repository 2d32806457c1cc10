//! Draft input, prefix indicator and submit routing.
//!
//! DESIGN
//! ======
//! The router keeps only the raw draft and the length cap; everything the
//! input bar displays (prefix chip, progress bar, counter, send button) is
//! derived from those on demand. Submitting produces exactly one outcome:
//! a classified chat message or a native command for the host.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::message::MessageType;

/// Chat prefixes recognized on submit, in priority order. The prefix
/// includes its trailing space; the message body is whatever follows it.
const CHAT_PREFIXES: [(&str, MessageType); 8] = [
    ("/ooc ", MessageType::Ooc),
    ("/me ", MessageType::Me),
    ("/do ", MessageType::Do),
    ("/ad ", MessageType::System),
    ("/tweet ", MessageType::Twitter),
    ("/911 ", MessageType::RadioPolice),
    ("/ems ", MessageType::RadioEms),
    ("/mec ", MessageType::RadioMechanic),
];

/// Chip shown at the left of the input while typing a known prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixIndicator {
    pub token: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

const PREFIX_INDICATORS: [PrefixIndicator; 8] = [
    PrefixIndicator { token: "/ooc", color: "#42A5F5", background: "rgba(33, 150, 243, 0.1)" },
    PrefixIndicator { token: "/me", color: "#BA68C8", background: "rgba(186, 104, 200, 0.1)" },
    PrefixIndicator { token: "/do", color: "#66BB6A", background: "rgba(102, 187, 106, 0.1)" },
    PrefixIndicator { token: "/ad", color: "#C5FF00", background: "rgba(197, 255, 0, 0.1)" },
    PrefixIndicator { token: "/tweet", color: "#1DA1F2", background: "rgba(29, 161, 242, 0.1)" },
    PrefixIndicator { token: "/911", color: "#4A90D9", background: "rgba(74, 144, 217, 0.1)" },
    PrefixIndicator { token: "/ems", color: "#FF6B6B", background: "rgba(255, 107, 107, 0.1)" },
    PrefixIndicator { token: "/mec", color: "#FFA500", background: "rgba(255, 165, 0, 0.1)" },
];

/// Outcome of a non-empty submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Chat { message: String, kind: MessageType },
    /// Slash input with no known chat prefix; the slash is stripped and the
    /// rest is passed on verbatim.
    Native { command: String },
}

/// Severity band of the length progress bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressLevel {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl ProgressLevel {
    /// Extra class for the progress bar, if any.
    #[must_use]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some("warning"),
            Self::Danger => Some("danger"),
        }
    }
}

/// Length feedback for the current draft.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub length: usize,
    pub max_length: usize,
    pub percent: f64,
    pub level: ProgressLevel,
}

impl Progress {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn measure(length: usize, max_length: usize) -> Self {
        let percent = if max_length == 0 { 0.0 } else { length as f64 / max_length as f64 * 100.0 };
        let level = if percent > 90.0 {
            ProgressLevel::Danger
        } else if percent > 70.0 {
            ProgressLevel::Warning
        } else {
            ProgressLevel::Normal
        };
        Self { length, max_length, percent, level }
    }

    /// The bar is only drawn once something has been typed.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.length > 0
    }

    /// Counter text, e.g. `12/256`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.length, self.max_length)
    }
}

/// Find the indicator for a draft: the longest token the draft starts with,
/// compared case-insensitively. Ties keep table order.
#[must_use]
pub fn prefix_indicator(text: &str) -> Option<PrefixIndicator> {
    let lower = text.to_lowercase();
    PREFIX_INDICATORS
        .iter()
        .filter(|p| lower.starts_with(p.token))
        .fold(None, |best: Option<&PrefixIndicator>, p| match best {
            Some(b) if b.token.len() >= p.token.len() => Some(b),
            _ => Some(p),
        })
        .copied()
}

/// Route already-trimmed, non-empty text to its submission.
#[must_use]
pub fn dispatch(trimmed: &str) -> Submission {
    for (prefix, kind) in CHAT_PREFIXES {
        if starts_with_ignore_case(trimmed, prefix) {
            return Submission::Chat { message: trimmed[prefix.len()..].to_owned(), kind };
        }
    }
    if let Some(command) = trimmed.strip_prefix('/') {
        return Submission::Native { command: command.to_owned() };
    }
    Submission::Chat { message: trimmed.to_owned(), kind: MessageType::Normal }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// The input bar's draft and focus.
#[derive(Clone, Debug)]
pub struct InputRouter {
    text: String,
    max_length: usize,
    focused: bool,
}

impl InputRouter {
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self { text: String::new(), max_length, focused: false }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the draft after a keystroke, capped at `max_length` chars.
    pub fn set_text(&mut self, raw: &str) {
        self.text = truncate_chars(raw, self.max_length);
        self.focused = true;
    }

    /// Change the cap, truncating the draft if it no longer fits.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
        self.text = truncate_chars(&self.text, max_length);
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Blur keeps the focused look while a draft is present.
    pub fn blur(&mut self) {
        if self.text.is_empty() {
            self.focused = false;
        }
    }

    /// Clear the draft and drop focus, as when the panel closes.
    pub fn close(&mut self) {
        self.text.clear();
        self.focused = false;
    }

    #[must_use]
    pub fn prefix(&self) -> Option<PrefixIndicator> {
        prefix_indicator(&self.text)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::measure(self.text.chars().count(), self.max_length)
    }

    /// Send is enabled iff the trimmed draft is non-empty.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Consume the draft. Empty or whitespace-only drafts are swallowed and
    /// left untouched; anything else resets the draft.
    pub fn submit(&mut self) -> Option<Submission> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let submission = dispatch(trimmed);
        self.text.clear();
        tracing::debug!(?submission, "input submitted");
        Some(submission)
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_owned(),
        None => text.to_owned(),
    }
}
