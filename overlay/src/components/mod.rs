//! Overlay components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatOverlay` is the container and message list, `ChatInput` the input
//! bar, and `Suggestions` the command dropdown above it. All three read the
//! shared session signal from context.

pub mod chat_input;
pub mod chat_overlay;
pub mod suggestions;
