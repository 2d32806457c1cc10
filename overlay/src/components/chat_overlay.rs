//! Chat container and message list.

use leptos::prelude::*;
use nova_chat::markup::Element;

use crate::components::chat_input::ChatInput;
use crate::state::session::SessionSignal;
use crate::util::dom::MESSAGES_ID;

/// The overlay panel. Its class follows the session's visibility state;
/// the stylesheet fades and hides it.
#[component]
pub fn ChatOverlay() -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let container_class = move || session.with(|s| s.state().container_class());
    let input_hidden = move || session.with(|s| !s.is_active());
    let entries = move || {
        session.with(|s| {
            s.messages()
                .map(|entry| (entry.seq, entry.node.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=container_class id="chatContainer">
            <div class="messages-list" id=MESSAGES_ID>
                <For
                    each=entries
                    key=|(seq, _)| *seq
                    children=|(_, node)| view! { <MessageRow node/> }
                />
            </div>
            <div class="input-area" id="inputArea" class:collapsed=input_hidden>
                <ChatInput/>
            </div>
        </div>
    }
}

/// One rendered message. The row element is created here; its content is the
/// already-escaped markup of the rendered tree.
#[component]
fn MessageRow(node: Element) -> impl IntoView {
    let class = node.class.clone();
    let style = node.style.clone();
    let inner = node.inner_html();
    view! { <div class=class style=style inner_html=inner></div> }
}
