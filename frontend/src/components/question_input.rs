//! Question input widget
//!
//! One component serves all six question kinds; the per-kind rules live in
//! [`InputWidget`]. The parent keys this component by input epoch, so every
//! new or re-shown question gets a freshly created widget.

use gloo::timers::callback::Timeout;
use shared::protocol::{NO_LABEL, OTHER_LABEL, YES_LABEL};
use shared::{format_number, QuestionDescriptor, ResponseValue};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::DEFAULT_YES_NO_DELAY_MS;
use crate::inputs::{Choice, InputAction, InputMsg, InputWidget, OTHER_PLACEHOLDER};
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct QuestionInputProps {
    pub question: QuestionDescriptor,
    /// Receives the normalized answer
    pub on_submit: Callback<ResponseValue>,
    #[prop_or(DEFAULT_YES_NO_DELAY_MS)]
    pub feedback_delay_ms: u32,
}

pub struct QuestionInput {
    widget: InputWidget,
    field_ref: NodeRef,
    other_ref: NodeRef,
    focus_other: bool,
    feedback_timer: Option<Timeout>,
}

impl Component for QuestionInput {
    type Message = InputMsg;
    type Properties = QuestionInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            widget: InputWidget::for_question(&ctx.props().question),
            field_ref: NodeRef::default(),
            other_ref: NodeRef::default(),
            focus_other: false,
            feedback_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.widget.update(msg) {
            InputAction::None => false,
            InputAction::Render => true,
            InputAction::RevealOther => {
                self.focus_other = true;
                true
            }
            InputAction::Submit(value) => {
                ctx.props().on_submit.emit(value);
                false
            }
            InputAction::SubmitAfterFeedback(value) => {
                let on_submit = ctx.props().on_submit.clone();
                self.feedback_timer = Some(Timeout::new(ctx.props().feedback_delay_ms, move || {
                    on_submit.emit(value);
                }));
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Callback identity changes on every parent render; only a new
        // question resets the widget.
        if ctx.props().question == old_props.question {
            return false;
        }
        self.widget = InputWidget::for_question(&ctx.props().question);
        self.focus_other = false;
        self.feedback_timer = None;
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            utils::focus(&self.field_ref);
        }
        if self.focus_other {
            self.focus_other = false;
            utils::focus(&self.other_ref);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.widget {
            InputWidget::Text { value, placeholder } => {
                self.view_field(ctx, "text", "text-input", value, Some(placeholder), None, None)
            }
            InputWidget::Numeric {
                value,
                placeholder,
                min,
                max,
            } => self.view_field(
                ctx,
                "number",
                "number-input",
                value,
                Some(placeholder),
                *min,
                *max,
            ),
            InputWidget::Date { value } => {
                self.view_field(ctx, "date", "date-input", value, None, None, None)
            }
            InputWidget::SingleChoice(draft) => {
                let options = draft.options().iter().enumerate().map(|(idx, label)| {
                    let choice = Choice::Option(idx);
                    view_choice(
                        ctx,
                        "radio",
                        idx,
                        label,
                        draft.selected() == Some(choice),
                        InputMsg::Select(choice),
                    )
                });
                let other = draft.allow_other().then(|| {
                    view_choice(
                        ctx,
                        "radio",
                        draft.options().len(),
                        OTHER_LABEL,
                        draft.selected() == Some(Choice::Other),
                        InputMsg::Select(Choice::Other),
                    )
                });
                self.view_choices(
                    ctx,
                    html! { <>{ for options }{ for other }</> },
                    draft.allow_other(),
                    draft.other_visible(),
                    draft.other_text(),
                )
            }
            InputWidget::MultiChoice(draft) => {
                let options = draft.options().iter().enumerate().map(|(idx, label)| {
                    let choice = Choice::Option(idx);
                    view_choice(
                        ctx,
                        "checkbox",
                        idx,
                        label,
                        draft.is_checked(choice),
                        InputMsg::Toggle(choice),
                    )
                });
                let other = draft.allow_other().then(|| {
                    view_choice(
                        ctx,
                        "checkbox",
                        draft.options().len(),
                        OTHER_LABEL,
                        draft.is_checked(Choice::Other),
                        InputMsg::Toggle(Choice::Other),
                    )
                });
                self.view_choices(
                    ctx,
                    html! { <>{ for options }{ for other }</> },
                    draft.allow_other(),
                    draft.other_visible(),
                    draft.other_text(),
                )
            }
            InputWidget::YesNo { selected } => {
                let selected = *selected;
                html! {
                    <div class="yes-no-group">
                        {
                            [(true, YES_LABEL), (false, NO_LABEL)].into_iter().map(|(answer, label)| {
                                let class = classes!(
                                    "yes-no-btn",
                                    (selected == Some(answer)).then_some("selected")
                                );
                                let onclick = ctx.link().callback(move |_| InputMsg::Answer(answer));
                                html! {
                                    <button {class} {onclick}>{ label }</button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                }
            }
        };

        html! {
            <div class={classes!("question-input", self.widget.kind_name())}>
                { body }
            </div>
        }
    }
}

impl QuestionInput {
    /// Single field plus Send button (text, numeric, date)
    #[allow(clippy::too_many_arguments)]
    fn view_field(
        &self,
        ctx: &Context<Self>,
        input_type: &'static str,
        class: &'static str,
        value: &str,
        placeholder: Option<&String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            InputMsg::Edit(input.value())
        });

        let onkeypress = self.widget.submits_on_enter().then(|| {
            ctx.link().batch_callback(|e: KeyboardEvent| {
                if e.key() == "Enter" {
                    Some(InputMsg::Confirm)
                } else {
                    None
                }
            })
        });

        let onclick = ctx.link().callback(|_| InputMsg::Confirm);

        html! {
            <div class="input-group">
                <input
                    type={input_type}
                    {class}
                    ref={self.field_ref.clone()}
                    value={value.to_string()}
                    placeholder={placeholder.cloned()}
                    min={min.map(format_number)}
                    max={max.map(format_number)}
                    autocomplete="off"
                    {oninput}
                    {onkeypress}
                />
                <button class="btn-primary" {onclick}>{ "Send" }</button>
            </div>
        }
    }

    /// Choice list, optional "Other" field and Send button
    fn view_choices(
        &self,
        ctx: &Context<Self>,
        items: Html,
        allow_other: bool,
        other_visible: bool,
        other_text: &str,
    ) -> Html {
        let on_other_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            InputMsg::EditOther(input.value())
        });
        let onclick = ctx.link().callback(|_| InputMsg::Confirm);

        html! {
            <>
                <div class="options-group">{ items }</div>
                if allow_other {
                    <div class={classes!("other-input-wrapper", (!other_visible).then_some("hidden"))}>
                        <input
                            type="text"
                            class="other-text-input"
                            ref={self.other_ref.clone()}
                            value={other_text.to_string()}
                            placeholder={OTHER_PLACEHOLDER}
                            autocomplete="off"
                            oninput={on_other_input}
                        />
                    </div>
                }
                <button class="btn-primary" disabled={!self.widget.can_confirm()} {onclick}>
                    { "Send" }
                </button>
            </>
        }
    }
}

fn view_choice(
    ctx: &Context<QuestionInput>,
    input_type: &'static str,
    idx: usize,
    label: &str,
    checked: bool,
    msg: InputMsg,
) -> Html {
    let id = format!("opt-{}", idx);
    let onchange = ctx.link().callback(move |_: Event| msg.clone());

    html! {
        <div class="option-item">
            <input
                type={input_type}
                name={format!("{}-response", input_type)}
                id={id.clone()}
                {checked}
                {onchange}
            />
            <label for={id}>{ label.to_string() }</label>
        </div>
    }
}
