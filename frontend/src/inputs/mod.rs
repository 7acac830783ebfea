//! Per-kind input state and normalization.
//!
//! [`InputWidget::for_question`] is the single dispatch point from a question
//! kind to its input strategy. The widget component only forwards DOM events
//! as [`InputMsg`]s and acts on the returned [`InputAction`].

mod choice;

pub use choice::{Choice, MultiChoiceDraft, SingleChoiceDraft};

use shared::{QuestionDescriptor, QuestionKind, ResponseValue};

pub const DEFAULT_TEXT_PLACEHOLDER: &str = "Type your response...";
pub const DEFAULT_NUMBER_PLACEHOLDER: &str = "Enter a number";
pub const OTHER_PLACEHOLDER: &str = "Please specify your answer...";

/// Coerce numeric field content the way the browser's `Number()` does:
/// blank becomes 0, anything unparseable becomes NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputWidget {
    Text {
        value: String,
        placeholder: String,
    },
    Numeric {
        value: String,
        placeholder: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    SingleChoice(SingleChoiceDraft),
    MultiChoice(MultiChoiceDraft),
    /// `selected` is set on the first click; later clicks are ignored
    YesNo { selected: Option<bool> },
    Date { value: String },
}

/// DOM-level events a widget can receive
#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    /// Main field content changed (text, numeric, date)
    Edit(String),
    /// "Other" free-text content changed
    EditOther(String),
    /// Radio selection
    Select(Choice),
    /// Checkbox flip
    Toggle(Choice),
    /// Yes/No button clicked
    Answer(bool),
    /// Send button clicked or Enter pressed
    Confirm,
}

/// What the widget component should do after an update
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Nothing changed
    None,
    /// State changed; re-render
    Render,
    /// Re-render and move focus to the "Other" field
    RevealOther,
    /// Hand the value to the session controller now
    Submit(ResponseValue),
    /// Re-render with the selection shown, then submit after the feedback delay
    SubmitAfterFeedback(ResponseValue),
}

impl InputWidget {
    pub fn for_question(question: &QuestionDescriptor) -> Self {
        match &question.kind {
            QuestionKind::Text => InputWidget::Text {
                value: String::new(),
                placeholder: placeholder_or(question, DEFAULT_TEXT_PLACEHOLDER),
            },
            QuestionKind::Numeric { min, max } => InputWidget::Numeric {
                value: String::new(),
                placeholder: placeholder_or(question, DEFAULT_NUMBER_PLACEHOLDER),
                min: *min,
                max: *max,
            },
            QuestionKind::SingleChoice {
                options,
                allow_other,
            } => InputWidget::SingleChoice(SingleChoiceDraft::new(options.clone(), *allow_other)),
            QuestionKind::MultiChoice {
                options,
                allow_other,
            } => InputWidget::MultiChoice(MultiChoiceDraft::new(options.clone(), *allow_other)),
            QuestionKind::YesNo => InputWidget::YesNo { selected: None },
            QuestionKind::Date => InputWidget::Date {
                value: String::new(),
            },
        }
    }

    /// Wire name of the question kind this widget serves
    pub fn kind_name(&self) -> &'static str {
        match self {
            InputWidget::Text { .. } => "text",
            InputWidget::Numeric { .. } => "numeric",
            InputWidget::SingleChoice(_) => "radio",
            InputWidget::MultiChoice(_) => "checkbox",
            InputWidget::YesNo { .. } => "yes_no",
            InputWidget::Date { .. } => "date",
        }
    }

    /// Whether Enter in the main field confirms
    pub fn submits_on_enter(&self) -> bool {
        matches!(self, InputWidget::Text { .. } | InputWidget::Numeric { .. })
    }

    /// Whether the Send button is enabled
    pub fn can_confirm(&self) -> bool {
        match self {
            InputWidget::SingleChoice(draft) => draft.can_confirm(),
            InputWidget::YesNo { .. } => false,
            _ => true,
        }
    }

    pub fn update(&mut self, msg: InputMsg) -> InputAction {
        match (self, msg) {
            (InputWidget::Text { value, .. }, InputMsg::Edit(text))
            | (InputWidget::Numeric { value, .. }, InputMsg::Edit(text))
            | (InputWidget::Date { value }, InputMsg::Edit(text)) => {
                *value = text;
                InputAction::Render
            }

            (InputWidget::Text { value, .. }, InputMsg::Confirm)
            | (InputWidget::Date { value }, InputMsg::Confirm) => {
                InputAction::Submit(ResponseValue::Text(value.clone()))
            }
            (InputWidget::Numeric { value, .. }, InputMsg::Confirm) => {
                InputAction::Submit(ResponseValue::Number(coerce_number(value)))
            }

            (InputWidget::SingleChoice(draft), InputMsg::Select(choice)) => {
                if draft.select(choice) {
                    InputAction::RevealOther
                } else {
                    InputAction::Render
                }
            }
            (InputWidget::SingleChoice(draft), InputMsg::EditOther(text)) => {
                draft.set_other_text(text);
                InputAction::Render
            }
            (InputWidget::SingleChoice(draft), InputMsg::Confirm) => match draft.confirm() {
                Some(value) => InputAction::Submit(value),
                None => InputAction::None,
            },

            (InputWidget::MultiChoice(draft), InputMsg::Toggle(choice)) => {
                if draft.toggle(choice) {
                    InputAction::RevealOther
                } else {
                    InputAction::Render
                }
            }
            (InputWidget::MultiChoice(draft), InputMsg::EditOther(text)) => {
                draft.set_other_text(text);
                InputAction::Render
            }
            (InputWidget::MultiChoice(draft), InputMsg::Confirm) => {
                InputAction::Submit(draft.confirm())
            }

            (InputWidget::YesNo { selected }, InputMsg::Answer(answer)) => {
                if selected.is_some() {
                    return InputAction::None;
                }
                *selected = Some(answer);
                InputAction::SubmitAfterFeedback(ResponseValue::Boolean(answer))
            }

            (widget, msg) => {
                log::debug!("Ignoring {:?} for {} input", msg, widget.kind_name());
                InputAction::None
            }
        }
    }
}

fn placeholder_or(question: &QuestionDescriptor, default: &str) -> String {
    question
        .placeholder
        .clone()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| default.to_string())
}
