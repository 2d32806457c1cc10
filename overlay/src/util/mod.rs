//! Browser helpers used by the session effect runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web_sys`/`js_sys` access behind plain functions so
//! components and state never touch the DOM directly. Without `csr` they are
//! inert and the pure conversions remain unit-testable.

pub mod clock;
pub mod dom;
pub mod timer;
