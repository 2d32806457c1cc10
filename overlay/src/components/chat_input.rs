//! Input bar: prefix chip, text field, counter, send button, progress bar.

use leptos::prelude::*;

use crate::components::suggestions::Suggestions;
use crate::net::host;
use crate::state::session::{SessionSignal, with_session};
use crate::util::dom::INPUT_ID;

/// Input bar bound to the session draft.
#[component]
pub fn ChatInput() -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let text = move || session.with(|s| s.input_text().to_owned());
    let max_length = move || session.with(|s| s.config().max_length.to_string());
    let can_send = move || session.with(|s| s.can_send());
    let prefix = move || session.with(|s| s.prefix());
    let progress = move || session.with(|s| s.progress());

    let bar_class = move || {
        if session.with(|s| s.input_focused()) {
            "input-bar focused"
        } else {
            "input-bar"
        }
    };
    let progress_class = move || match progress().level.class() {
        Some(level) => format!("input-progress {level}"),
        None => "input-progress".to_owned(),
    };
    let progress_width = move || format!("{}%", progress().percent);
    let progress_opacity = move || if progress().visible() { "0.6" } else { "0" };
    let counter_class = move || progress().level.class().filter(|level| *level == "danger").unwrap_or_default();

    let do_send = move || {
        if let Some(Some(event)) = with_session(session, |s| s.submit()) {
            host::post(event);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    view! {
        <form class="chat-form" id="chatForm" on:submit=on_submit>
            <Suggestions/>
            <div class=bar_class id="inputBar">
                {move || {
                    prefix()
                        .map(|p| {
                            view! {
                                <span
                                    class="command-prefix"
                                    id="commandPrefix"
                                    style:color=p.color
                                    style:background=p.background
                                >
                                    {p.token}
                                </span>
                            }
                        })
                }}
                <input
                    class="chat-input"
                    id=INPUT_ID
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    placeholder="Digite uma mensagem ou /comando..."
                    maxlength=max_length
                    prop:value=text
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        with_session(session, |s| s.set_input(&value));
                    }
                    on:focus=move |_| {
                        with_session(session, |s| s.focus_input());
                    }
                    on:blur=move |_| {
                        with_session(session, |s| s.blur_input());
                    }
                />
                <span class=counter_class id="charCount">{move || progress().label()}</span>
                <button class="send-btn" id="sendBtn" type="submit" disabled=move || !can_send()>
                    "Enviar"
                </button>
            </div>
            <div
                class=progress_class
                id="inputProgress"
                style:width=progress_width
                style:opacity=progress_opacity
            ></div>
        </form>
    }
}
