//! Root component: session context and window listeners.

use leptos::prelude::*;

use crate::components::chat_overlay::ChatOverlay;
use crate::state::session::new_session;

/// Root application component.
///
/// Provides the session context and, in the browser, subscribes to host
/// `message` events and document-level key presses.
#[component]
pub fn App() -> impl IntoView {
    let session = new_session();
    provide_context(session);

    #[cfg(feature = "csr")]
    {
        use crate::net::host;
        use crate::state::session::with_session;
        use nova_chat::Key;

        let messages = window_event_listener(leptos::ev::message, move |ev| {
            host::on_window_message(session, &ev);
        });
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = Key::from_dom(&ev.key());
            if let Some(Some(event)) = with_session(session, |s| s.key_down(key)) {
                host::post(event);
            }
        });
        on_cleanup(move || {
            messages.remove();
            keys.remove();
        });
    }

    view! { <ChatOverlay/> }
}
