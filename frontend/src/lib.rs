mod api;
mod components;
pub mod config;
pub mod inputs;
mod pages;
pub mod session;
pub mod utils;

use config::AppConfig;
use pages::questionnaire::QuestionnairePage;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_document());

    html! {
        <QuestionnairePage config={(*config).clone()} />
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
