//! Inbound host messages and outbound posts.
//!
//! Client-side (csr): real `fetch` posts via `gloo-net` and a `message`
//! listener on `window`. Elsewhere posting is a logged no-op.
//!
//! ERROR HANDLING
//! ==============
//! Undecodable host messages are logged and dropped. Posts are
//! fire-and-forget: failures are logged and never retried, since the host
//! does not reply with anything the overlay uses.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use nova_chat::OutgoingEvent;
use nova_chat::protocol::{self, ProtocolError};

use crate::state::session::{SessionSignal, with_session};

/// Resource name of the host script the overlay belongs to.
pub const RESOURCE_NAME: &str = "nova_chat";

fn endpoint(event: &str) -> String {
    format!("https://{RESOURCE_NAME}/{event}")
}

/// Post an outbound event to the host without waiting for the reply.
pub fn post(event: OutgoingEvent) {
    let url = endpoint(event.name());
    let body = event.body();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(e) = send(&url, &body).await {
            leptos::logging::warn!("post {url} failed: {e}");
        }
    });
    #[cfg(not(feature = "csr"))]
    tracing::debug!(%url, %body, "post skipped outside the browser");
}

#[cfg(feature = "csr")]
async fn send(url: &str, body: &serde_json::Value) -> Result<(), gloo_net::Error> {
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    if !resp.ok() {
        leptos::logging::warn!("post {url} returned {}", resp.status());
    }
    Ok(())
}

/// Decode raw message JSON and apply it to the session.
///
/// Messages without an `action` are not meant for the overlay (other scripts
/// share the window) and are dropped quietly; anything else that fails to
/// decode is logged.
pub fn receive(session: SessionSignal, raw: &str) -> Result<(), ProtocolError> {
    match protocol::decode_host_event_str(raw) {
        Ok(event) => {
            with_session(session, |s| s.handle(event));
            Ok(())
        }
        Err(ProtocolError::MissingAction) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Like [`receive`], for a payload that may have no JSON form at all
/// (`undefined`, functions). Those are dropped quietly like action-less
/// messages.
pub fn receive_payload(session: SessionSignal, raw: Option<&str>) -> Result<(), ProtocolError> {
    match raw {
        Some(raw) => receive(session, raw),
        None => Ok(()),
    }
}

/// `message` listener body: stringify the event payload and hand it to
/// [`receive_payload`].
#[cfg(feature = "csr")]
pub fn on_window_message(session: SessionSignal, ev: &web_sys::MessageEvent) {
    let raw = match js_sys::JSON::stringify(&ev.data()) {
        Ok(raw) => raw.as_string(),
        Err(e) => {
            leptos::logging::warn!("host message is not serializable: {e:?}");
            return;
        }
    };
    if let Err(e) = receive_payload(session, raw.as_deref()) {
        leptos::logging::warn!("host message dropped: {e}");
    }
}
