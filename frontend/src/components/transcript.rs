//! Conversation transcript
//!
//! Renders transcript entries in order, followed by the loading bubble
//! while a request is outstanding.

use yew::prelude::*;

use super::completion_card::CompletionCard;
use crate::session::TranscriptEntry;

#[derive(Properties, PartialEq)]
pub struct TranscriptViewProps {
    pub entries: Vec<TranscriptEntry>,
    pub loading: bool,
    pub on_share: Callback<()>,
    /// Scroll container, owned by the page so it can scroll after render
    pub container_ref: NodeRef,
}

#[function_component(TranscriptView)]
pub fn transcript_view(props: &TranscriptViewProps) -> Html {
    html! {
        <div class="chat-messages" ref={props.container_ref.clone()}>
            { for props.entries.iter().map(|entry| view_entry(entry, &props.on_share)) }
            if props.loading {
                <div class="message ai loading">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            }
        </div>
    }
}

fn view_entry(entry: &TranscriptEntry, on_share: &Callback<()>) -> Html {
    match entry {
        TranscriptEntry::Message { speaker, text } => html! {
            <div class={classes!("message", speaker.css_class())}>
                { text.clone() }
            </div>
        },
        TranscriptEntry::Completion => html! {
            <CompletionCard on_share={on_share.clone()} />
        },
    }
}
