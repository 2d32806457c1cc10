//! Command autocomplete dropdown.

use leptos::prelude::*;

use crate::state::session::{SessionSignal, with_session};

/// Dropdown listing the session's current suggestions. Hidden when empty.
#[component]
pub fn Suggestions() -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let items = move || {
        session.with(|s| {
            s.suggestions()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let hidden = move || session.with(|s| s.suggestions().is_empty());

    view! {
        <div class="suggestions-dropdown" id="suggestionsDropdown" class:collapsed=hidden>
            {move || {
                items()
                    .into_iter()
                    .map(|(index, command)| {
                        view! {
                            <button
                                class="suggestion-item"
                                type="button"
                                on:mousedown=|ev| ev.prevent_default()
                                on:click=move |_| {
                                    with_session(session, |s| s.select_suggestion(index));
                                }
                            >
                                <span class="suggestion-icon">{command.icon}</span>
                                <div class="suggestion-info">
                                    <div class="suggestion-cmd" style:color=command.color>
                                        {command.command}
                                    </div>
                                    <div class="suggestion-desc">{command.description}</div>
                                </div>
                                <span class="suggestion-enter">"Enter"</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
