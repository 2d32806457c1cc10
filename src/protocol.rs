//! Host event model and JSON codec.
//!
//! The host talks to the overlay over one logical channel. Inbound events are
//! JSON objects tagged by `action`; outbound events are fire-and-forget posts
//! named by endpoint with a JSON body.
//!
//! ERROR HANDLING
//! ==============
//! Decoding distinguishes a missing tag, an unknown action and a malformed
//! payload so the frontend can log something useful before dropping the
//! event. Nothing is ever reported back to the host.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::ConfigPatch;
use crate::message::{ChatMessage, MessageType};

/// Actions the host may send.
pub const HOST_ACTIONS: [&str; 6] = ["open", "close", "addMessage", "addMessages", "clearMessages", "config"];

/// Error returned by [`decode_host_event`].
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The payload has no string `action` field.
    #[error("host event has no action")]
    MissingAction,
    /// The `action` names something this overlay does not handle.
    #[error("unknown host action: {0}")]
    UnknownAction(String),
    /// The action is known but its payload does not fit.
    #[error("malformed host event payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inbound event pushed by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostEvent {
    Open,
    Close,
    AddMessage {
        message: ChatMessage,
    },
    AddMessages {
        #[serde(default, deserialize_with = "lenient_messages")]
        messages: Vec<ChatMessage>,
    },
    ClearMessages,
    Config(ConfigPatch),
}

/// Batch entries that do not decode are skipped so the rest still land.
fn lenient_messages<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut messages = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value(entry) {
            Ok(message) => messages.push(message),
            Err(e) => tracing::warn!(index, error = %e, "skipped malformed batch message"),
        }
    }
    Ok(messages)
}

impl HostEvent {
    /// Wire name of the action.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::AddMessage { .. } => "addMessage",
            Self::AddMessages { .. } => "addMessages",
            Self::ClearMessages => "clearMessages",
            Self::Config(_) => "config",
        }
    }
}

/// Outbound event posted to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutgoingEvent {
    /// A chat line, already classified.
    SendMessage { message: String, kind: MessageType },
    /// A slash command the overlay does not handle itself, without the slash.
    ExecuteCommand { command: String },
    /// The user asked to dismiss the panel.
    Close,
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    message: &'a str,
    #[serde(rename = "type")]
    kind: MessageType,
}

#[derive(Serialize)]
struct ExecuteCommandBody<'a> {
    command: &'a str,
}

impl OutgoingEvent {
    /// Endpoint name the event is posted to.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SendMessage { .. } => "sendMessage",
            Self::ExecuteCommand { .. } => "executeCommand",
            Self::Close => "close",
        }
    }

    /// JSON body of the post. Events without a payload send `{}`.
    #[must_use]
    pub fn body(&self) -> Value {
        let encoded = match self {
            Self::SendMessage { message, kind } => serde_json::to_value(SendMessageBody { message, kind: *kind }),
            Self::ExecuteCommand { command } => serde_json::to_value(ExecuteCommandBody { command }),
            Self::Close => return Value::Object(serde_json::Map::new()),
        };
        // Both bodies are plain string/enum structs; serialization cannot fail.
        encoded.unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
    }
}

/// Decode a host event from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`ProtocolError::MissingAction`] when there is no string `action`,
/// [`ProtocolError::UnknownAction`] for actions outside [`HOST_ACTIONS`], and
/// [`ProtocolError::Json`] when the payload does not match the action.
pub fn decode_host_event(value: Value) -> Result<HostEvent, ProtocolError> {
    let action = match value.get("action") {
        Some(Value::String(action)) => action.clone(),
        _ => return Err(ProtocolError::MissingAction),
    };
    if !HOST_ACTIONS.contains(&action.as_str()) {
        tracing::warn!(%action, "rejected host event");
        return Err(ProtocolError::UnknownAction(action));
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(%action, error = %e, "malformed host event");
        ProtocolError::Json(e)
    })
}

/// Decode a host event from raw JSON text.
///
/// # Errors
///
/// Same as [`decode_host_event`], plus [`ProtocolError::Json`] for text that
/// is not JSON at all.
pub fn decode_host_event_str(raw: &str) -> Result<HostEvent, ProtocolError> {
    let value: Value = serde_json::from_str(raw)?;
    decode_host_event(value)
}
