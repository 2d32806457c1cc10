//! # nova-chat
//!
//! Core of the in-game chat overlay. The host process pushes messages and
//! configuration; this crate classifies and renders them, tracks the panel's
//! fade lifecycle, and turns typed input into chat messages or native command
//! invocations with autocomplete suggestions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches a browser. `overlay/` binds a [`ChatSession`] to the
//! DOM, forwards host events into it and performs the [`Effect`]s it queues.
//! Rendering produces an abstract [`markup::Node`] tree so the same output can
//! be serialized, asserted in tests, or turned into escaped HTML.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod feed;
pub mod format;
pub mod input;
pub mod markup;
pub mod message;
pub mod protocol;
pub mod session;
pub mod suggest;
pub mod visibility;

pub use catalog::Command;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ChatConfig, ConfigPatch};
pub use message::{ChatMessage, MessageType};
pub use protocol::{HostEvent, OutgoingEvent, ProtocolError};
pub use session::{ChatSession, Effect, Key};
pub use visibility::VisibilityState;
