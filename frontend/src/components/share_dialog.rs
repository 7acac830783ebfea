use yew::prelude::*;

use super::copy_field::CopyField;

#[derive(Properties, PartialEq)]
pub struct ShareDialogProps {
    pub share_url: String,
    pub on_close: Callback<()>,
}

/// Modal overlay offering the share link
#[function_component(ShareDialog)]
pub fn share_dialog(props: &ShareDialogProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_dialog_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="share-dialog-overlay" onclick={on_overlay_click}>
            <div class="share-dialog" onclick={on_dialog_click}>
                <div class="share-dialog-header">
                    <h2>{ "Share with friends" }</h2>
                    <button class="share-dialog-close" onclick={on_close_click}>
                        { "×" }
                    </button>
                </div>
                <p class="share-dialog-text">
                    { "Copy the link below and send it to your friends:" }
                </p>
                <CopyField value={props.share_url.clone()} />
            </div>
        </div>
    }
}
