//! QuestionnairePage component - the single chat view
//!
//! Owns the [`SessionController`] and runs the effects it asks for.

use std::rc::Rc;

use shared::ResponseValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::BrowserApiClient;
use crate::components::{ProgressBar, QuestionInput, ShareDialog, TranscriptView};
use crate::config::AppConfig;
use crate::session::{perform, Effect, Outcome, SessionController, SessionPhase};
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct QuestionnairePageProps {
    pub config: AppConfig,
}

pub enum QuestionnaireMsg {
    Start,
    Submit(ResponseValue),
    /// A service call finished
    Outcome(Outcome),
    OpenShare,
    CloseShare,
}

pub struct QuestionnairePage {
    controller: SessionController,
    api: Rc<BrowserApiClient>,
    share_open: bool,
    messages_ref: NodeRef,
}

impl Component for QuestionnairePage {
    type Message = QuestionnaireMsg;
    type Properties = QuestionnairePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = BrowserApiClient::new(ctx.props().config.api_client_config());
        Self {
            controller: SessionController::new(),
            api: Rc::new(api),
            share_open: false,
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuestionnaireMsg::Start => match self.controller.start() {
                Ok(effect) => {
                    self.dispatch(ctx, effect);
                    true
                }
                Err(e) => {
                    log::warn!("Ignoring start request: {}", e);
                    false
                }
            },
            QuestionnaireMsg::Submit(value) => match self.controller.submit_response(value) {
                Ok(effect) => {
                    self.dispatch(ctx, effect);
                    true
                }
                Err(e) => {
                    log::warn!("Ignoring submission: {}", e);
                    false
                }
            },
            QuestionnaireMsg::Outcome(outcome) => {
                for effect in self.controller.apply(outcome) {
                    self.dispatch(ctx, effect);
                }
                true
            }
            QuestionnaireMsg::OpenShare => {
                self.share_open = true;
                true
            }
            QuestionnaireMsg::CloseShare => {
                self.share_open = false;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        utils::scroll_to_bottom(&self.messages_ref);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let progress = self.controller.progress();
        let not_started = self.controller.phase() == SessionPhase::NotStarted;

        let on_start = ctx.link().callback(|_| QuestionnaireMsg::Start);
        let on_submit = ctx.link().callback(QuestionnaireMsg::Submit);
        let on_share = ctx.link().callback(|_| QuestionnaireMsg::OpenShare);
        let on_close_share = ctx.link().callback(|_| QuestionnaireMsg::CloseShare);

        html! {
            <div class="chat-container">
                <header class="chat-header">
                    <h1>{ "Questionnaire" }</h1>
                    if progress.visible {
                        <ProgressBar percent={progress.percent} />
                    }
                </header>

                if not_started {
                    <div class="start-screen">
                        <p>{ "Answer a few questions in a quick chat." }</p>
                        <button class="btn-primary start-button" onclick={on_start}>
                            { "Start" }
                        </button>
                    </div>
                }

                <TranscriptView
                    entries={self.controller.transcript().entries().to_vec()}
                    loading={self.controller.is_loading()}
                    on_share={on_share}
                    container_ref={self.messages_ref.clone()}
                />

                if let Some(active) = self.controller.active_input() {
                    <div class="chat-input-area">
                        <QuestionInput
                            key={active.epoch.to_string()}
                            question={active.question.clone()}
                            {on_submit}
                            feedback_delay_ms={config.yes_no_delay_ms}
                        />
                    </div>
                }

                if self.share_open {
                    <ShareDialog share_url={config.share_url.clone()} on_close={on_close_share} />
                }
            </div>
        }
    }
}

impl QuestionnairePage {
    /// Run an effect in the background and feed its outcome back as a message
    fn dispatch(&self, ctx: &Context<Self>, effect: Effect) {
        let api = Rc::clone(&self.api);
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = perform(api.as_ref(), effect).await;
            link.send_message(QuestionnaireMsg::Outcome(outcome));
        });
    }
}
