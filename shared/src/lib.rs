use serde::{Deserialize, Serialize};
use std::fmt;

// Display constants shared between the renderer and the transcript
pub mod protocol;

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, QuestionnaireApi};

/// A prompt issued by the questionnaire service.
///
/// Common fields sit on the struct; everything that depends on the question
/// type lives in [`QuestionKind`], which is selected by the wire `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    /// Server-side question identifier, if the service sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw question text (the conversational phrasing arrives in `message`)
    #[serde(default, alias = "prompt", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Placeholder hint for free-form inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl QuestionDescriptor {
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            id: None,
            text: None,
            placeholder: None,
            kind,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// The six answer shapes the service can ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Single-line free text
    Text,

    /// A number, with optional inclusive bounds used only as widget hints
    Numeric {
        #[serde(
            default,
            rename = "minValue",
            alias = "min_value",
            alias = "min",
            skip_serializing_if = "Option::is_none"
        )]
        min: Option<f64>,
        #[serde(
            default,
            rename = "maxValue",
            alias = "max_value",
            alias = "max",
            skip_serializing_if = "Option::is_none"
        )]
        max: Option<f64>,
    },

    /// Pick exactly one label
    #[serde(rename = "radio")]
    SingleChoice {
        /// Labels in display order
        #[serde(default)]
        options: Vec<String>,
        /// Whether a free-text "Other" escape is offered
        #[serde(default, rename = "allowOther", alias = "allow_other")]
        allow_other: bool,
    },

    /// Pick any number of labels, including none
    #[serde(rename = "checkbox")]
    MultiChoice {
        #[serde(default)]
        options: Vec<String>,
        #[serde(default, rename = "allowOther", alias = "allow_other")]
        allow_other: bool,
    },

    /// Yes or No
    #[serde(rename = "yes_no")]
    YesNo,

    /// A date in the browser's native date picker format
    Date,
}

impl QuestionKind {
    /// Short machine name matching the wire `type` value
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Numeric { .. } => "numeric",
            QuestionKind::SingleChoice { .. } => "radio",
            QuestionKind::MultiChoice { .. } => "checkbox",
            QuestionKind::YesNo => "yes_no",
            QuestionKind::Date => "date",
        }
    }
}

/// A normalized answer, shaped the way the service expects for its question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Boolean(bool),
    /// Non-finite numbers serialize as JSON `null`
    Number(f64),
    Text(String),
    /// Selected labels in display order
    Choices(Vec<String>),
}

impl fmt::Display for ResponseValue {
    /// Human-readable form used for the user's transcript bubble
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Boolean(true) => f.write_str(protocol::YES_LABEL),
            ResponseValue::Boolean(false) => f.write_str(protocol::NO_LABEL),
            ResponseValue::Number(n) => f.write_str(&format_number(*n)),
            ResponseValue::Text(s) => f.write_str(s),
            ResponseValue::Choices(labels) => f.write_str(&labels.join(protocol::CHOICE_SEPARATOR)),
        }
    }
}

/// Format a number the way a browser prints it (e.g. 42.0 -> "42", NaN -> "NaN")
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

/// Response for POST /session/start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    #[serde(alias = "session_id")]
    pub session_id: String,
    /// Greeting plus the phrasing of the first question
    pub message: String,
    #[serde(default)]
    pub question: Option<QuestionDescriptor>,
    #[serde(default, alias = "is_complete")]
    pub is_complete: bool,
}

/// Request body for POST /session/respond
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    #[serde(alias = "session_id")]
    pub session_id: String,
    pub value: ResponseValue,
}

/// Response for POST /session/respond
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondResponse {
    pub message: String,
    #[serde(default)]
    pub question: Option<QuestionDescriptor>,
    #[serde(default, alias = "is_complete")]
    pub is_complete: bool,
    /// The previous answer did not count; `question` is a follow-up
    #[serde(default, alias = "needs_clarification")]
    pub needs_clarification: bool,
}

/// Response for GET /session/status/{session_id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(alias = "response_count")]
    pub response_count: u32,
    #[serde(alias = "total_questions")]
    pub total_questions: u32,
}
