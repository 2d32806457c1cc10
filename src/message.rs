//! Inbound chat message model.
//!
//! DESIGN
//! ======
//! The host is a scripting runtime that sends loosely typed JSON. Every
//! optional field is decoded leniently: wrong shapes and falsy values collapse
//! to `None` (or to [`MessageType::Normal`]) instead of failing the whole
//! message. Only `message` itself is required.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Largest absolute epoch-millis value a browser `Date` accepts.
pub const MAX_TIMESTAMP_MS: i64 = 8_640_000_000_000_000;

/// Closed classification of a chat message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    #[default]
    Normal,
    Ooc,
    Me,
    Do,
    System,
    Admin,
    Twitter,
    Radio,
    RadioPolice,
    RadioEms,
    RadioMechanic,
}

impl MessageType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Normal,
        Self::Ooc,
        Self::Me,
        Self::Do,
        Self::System,
        Self::Admin,
        Self::Twitter,
        Self::Radio,
        Self::RadioPolice,
        Self::RadioEms,
        Self::RadioMechanic,
    ];

    /// Wire name of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ooc => "ooc",
            Self::Me => "me",
            Self::Do => "do",
            Self::System => "system",
            Self::Admin => "admin",
            Self::Twitter => "twitter",
            Self::Radio => "radio",
            Self::RadioPolice => "radio-police",
            Self::RadioEms => "radio-ems",
            Self::RadioMechanic => "radio-mechanic",
        }
    }

    /// Parse a wire name. Unknown names fall back to `Normal`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or_default()
    }

    /// Whether this type is one of the radio variants.
    #[must_use]
    pub fn is_radio(self) -> bool {
        matches!(self, Self::Radio | Self::RadioPolice | Self::RadioEms | Self::RadioMechanic)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player identifier as shown in the `ID:` badge. Hosts send either a
/// number or a string; both are kept as display text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build an id from a JSON value, treating falsy values as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if n.as_f64().is_some_and(|v| v == 0.0) {
                    None
                } else {
                    Some(Self(n.to_string()))
                }
            }
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            _ => None,
        }
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chat message as supplied by the host. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub kind: MessageType,
    pub message: String,
    #[serde(default, deserialize_with = "lenient_player_id", skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub player_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub department_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ChatMessage {
    /// A plain message of the given type with no player metadata.
    #[must_use]
    pub fn new(kind: MessageType, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_player(mut self, id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        self.player_id = Some(id.into());
        self.player_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.player_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_department(mut self, name: impl Into<String>, color: Option<&str>) -> Self {
        self.department = Some(name.into());
        self.department_color = color.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, millis: i64) -> Self {
        self.timestamp = Some(millis);
        self
    }
}

fn lenient_type<'de, D>(deserializer: D) -> Result<MessageType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(name)) => MessageType::parse(&name),
        _ => MessageType::Normal,
    })
}

fn lenient_player_id<'de, D>(deserializer: D) -> Result<Option<PlayerId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(PlayerId::from_value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Number(n)) = value else {
        return Ok(None);
    };
    let millis = n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.abs() <= MAX_TIMESTAMP_MS as f64)
            .map(|f| f.trunc() as i64)
    });
    Ok(millis.filter(|ms| *ms != 0))
}
