use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompletionCardProps {
    pub on_share: Callback<()>,
}

/// Shown once, at the end of the transcript, when the questionnaire is done
#[function_component(CompletionCard)]
pub fn completion_card(props: &CompletionCardProps) -> Html {
    let on_share = {
        let on_share = props.on_share.clone();
        Callback::from(move |_: MouseEvent| on_share.emit(()))
    };

    html! {
        <div class="completion-card">
            <div class="completion-icon">{ "✓" }</div>
            <p class="completion-text">{ "Your responses have been saved." }</p>
            <button class="btn-primary share-button" onclick={on_share}>
                { "Share with friends" }
            </button>
        </div>
    }
}
