//! API client types and trait definitions
//!
//! This module defines the questionnaire service contract. The browser client
//! implements it with gloo-net; tests implement it with scripted responses.

use serde::{Deserialize, Serialize};

use crate::{RespondRequest, RespondResponse, StartResponse, StatusResponse};

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Session or resource not found
    NotFound(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// API endpoint definitions
pub mod endpoints {
    pub const SESSION_START: &str = "/session/start";
    pub const SESSION_RESPOND: &str = "/session/respond";

    pub fn session_status(id: &str) -> String {
        format!("/session/status/{}", id)
    }
}

/// Trait defining the questionnaire service API
///
/// All methods are async and return Result<T, ApiError>. Implementations
/// must not retry; the session controller decides how failures surface.
#[allow(async_fn_in_trait)]
pub trait QuestionnaireApi {
    /// Open a new session and fetch the first question
    async fn start_session(&self) -> Result<StartResponse, ApiError>;

    /// Submit an answer for the pending question
    async fn respond(&self, req: &RespondRequest) -> Result<RespondResponse, ApiError>;

    /// Look up progress for a session
    async fn status(&self, session_id: &str) -> Result<StatusResponse, ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8000" or "https://example.com/api")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}
