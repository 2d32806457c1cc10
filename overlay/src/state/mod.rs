//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The whole overlay is one `ChatSession` held in a single `RwSignal` and
//! provided via context. Components read derived values from it; every
//! mutation goes through [`session::with_session`] so queued effects are
//! always performed.

pub mod session;
