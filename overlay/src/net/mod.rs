//! Host bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! `host` receives `window.postMessage` events from the game host and posts
//! outbound events back to its resource endpoint.

pub mod host;
