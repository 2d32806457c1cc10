//! DOM access for input focus and feed scrolling.

/// `id` of the text input.
pub const INPUT_ID: &str = "chatInput";
/// `id` of the scrolling message list.
pub const MESSAGES_ID: &str = "messagesList";

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    match element.dyn_into::<web_sys::HtmlElement>() {
        Ok(html) => Some(html),
        Err(_) => None,
    }
}

pub fn focus_input() {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = html_element(INPUT_ID) {
            if let Err(e) = input.focus() {
                leptos::logging::warn!("focus failed: {e:?}");
            }
        }
    }
}

pub fn blur_input() {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = html_element(INPUT_ID) {
            if let Err(e) = input.blur() {
                leptos::logging::warn!("blur failed: {e:?}");
            }
        }
    }
}

/// Scroll the message list to the bottom on the next animation frame, after
/// the newly appended row has been laid out.
pub fn scroll_to_bottom() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            if let Some(list) = html_element(MESSAGES_ID) {
                list.set_scroll_top(list.scroll_height());
            }
        });
        if let Err(e) = window.request_animation_frame(cb.unchecked_ref()) {
            leptos::logging::warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}
