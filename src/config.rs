//! Process-wide chat settings and partial updates from the host.
//!
//! DESIGN
//! ======
//! `ChatConfig` is the resolved settings; `ConfigPatch` is the wire shape of
//! the host `config` event where every field is optional. Merging only
//! touches fields that are present, so a patch carrying `maxLength` alone
//! leaves the fade timeout and message cap as they were.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::Command;

pub const DEFAULT_MAX_MESSAGES: usize = 100;
pub const DEFAULT_FADE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// Resolved settings used by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub max_messages: usize,
    pub fade_timeout_ms: u64,
    /// Accepted from the host and kept, but rendering always emits the time.
    pub show_timestamps: bool,
    pub max_length: usize,
    /// Host-supplied catalog override. Empty means "use the built-in one".
    pub commands: Vec<Command>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_messages: DEFAULT_MAX_MESSAGES,
            fade_timeout_ms: DEFAULT_FADE_TIMEOUT_MS,
            show_timestamps: true,
            max_length: DEFAULT_MAX_LENGTH,
            commands: Vec::new(),
        }
    }
}

/// A setting touched by [`ChatConfig::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigField {
    MaxMessages,
    FadeTimeout,
    ShowTimestamps,
    MaxLength,
    Commands,
}

/// Partial settings as sent by the host. Absent fields leave the current
/// value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub max_messages: Option<usize>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub fade_timeout: Option<u64>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_timestamps: Option<bool>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Command>>,
}

/// Non-negative integers only. Fractions, negatives and non-numbers are
/// treated as absent so the rest of the patch still applies.
fn lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let count = value.as_u64().and_then(|n| match T::try_from(n) {
        Ok(count) => Some(count),
        Err(_) => None,
    });
    if count.is_none() {
        tracing::warn!(%value, "ignored non-integer config value");
    }
    Ok(count)
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_bool()))
}

impl ChatConfig {
    /// Merge a host patch and report which fields changed value.
    ///
    /// Zero for a numeric field counts as absent, matching how the host has
    /// always treated falsy values.
    pub fn apply(&mut self, patch: &ConfigPatch) -> Vec<ConfigField> {
        let mut changed = Vec::new();

        if let Some(max) = patch.max_messages.filter(|v| *v > 0) {
            if self.max_messages != max {
                self.max_messages = max;
                changed.push(ConfigField::MaxMessages);
            }
        }
        if let Some(timeout) = patch.fade_timeout.filter(|v| *v > 0) {
            if self.fade_timeout_ms != timeout {
                self.fade_timeout_ms = timeout;
                changed.push(ConfigField::FadeTimeout);
            }
        }
        if let Some(show) = patch.show_timestamps {
            if self.show_timestamps != show {
                self.show_timestamps = show;
                changed.push(ConfigField::ShowTimestamps);
            }
        }
        if let Some(max) = patch.max_length.filter(|v| *v > 0) {
            if self.max_length != max {
                self.max_length = max;
                changed.push(ConfigField::MaxLength);
            }
        }
        if let Some(commands) = &patch.commands {
            if &self.commands != commands {
                self.commands.clone_from(commands);
                changed.push(ConfigField::Commands);
            }
        }

        changed
    }
}
