//! Copy Field Component
//!
//! A read-only text field with a copy-to-clipboard button.

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

/// How long the "Copied!" feedback stays up
const COPIED_FEEDBACK_MS: u32 = 2000;

#[derive(Properties, PartialEq, Clone)]
pub struct CopyFieldProps {
    /// The text to display and copy
    pub value: String,
}

#[function_component(CopyField)]
pub fn copy_field(props: &CopyFieldProps) -> Html {
    let copied = use_state(|| false);
    let input_ref = use_node_ref();

    let on_copy = {
        let value = props.value.clone();
        let copied = copied.clone();
        let input_ref = input_ref.clone();

        Callback::from(move |_: MouseEvent| {
            let value = value.clone();
            let copied = copied.clone();

            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.select();
            }

            spawn_local(async move {
                let Some(window) = window() else {
                    return;
                };
                let navigator = window.navigator();
                let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
                    .ok()
                    .and_then(|v| v.dyn_into::<web_sys::Clipboard>().ok());

                let Some(clipboard) = clipboard else {
                    log::warn!("Clipboard API unavailable");
                    return;
                };

                let promise = clipboard.write_text(&value);
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("Failed to copy share link: {:?}", e);
                    return;
                }

                copied.set(true);

                let copied_reset = copied.clone();
                Timeout::new(COPIED_FEEDBACK_MS, move || {
                    copied_reset.set(false);
                })
                .forget();
            });
        })
    };

    let button_text = if *copied { "Copied!" } else { "Copy" };

    html! {
        <div class="copy-field">
            <div class="copy-field-row">
                <input
                    type="text"
                    class="copy-field-input"
                    ref={input_ref}
                    value={props.value.clone()}
                    readonly={true}
                />
                <button
                    class={classes!("btn-primary", "copy-button", (*copied).then_some("copied"))}
                    onclick={on_copy}
                    title="Copy to clipboard"
                >
                    { button_text }
                </button>
            </div>
            <p class={classes!("copy-field-feedback", (!*copied).then_some("hidden"))}>
                { "Copied to clipboard!" }
            </p>
        </div>
    }
}
