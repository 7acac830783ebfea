//! Browser HTTP client implementation using gloo-net

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::api::{endpoints, ApiClientConfig, ApiError, QuestionnaireApi};
use shared::{RespondRequest, RespondResponse, StartResponse, StatusResponse};

/// Questionnaire API client backed by `fetch`
pub struct BrowserApiClient {
    config: ApiClientConfig,
}

impl BrowserApiClient {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if status == 404 {
            return Err(ApiError::NotFound("Session not found".to_string()));
        }

        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl QuestionnaireApi for BrowserApiClient {
    async fn start_session(&self) -> Result<StartResponse, ApiError> {
        let url = self.config.url(endpoints::SESSION_START);
        log::info!("POST {}", url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    async fn respond(&self, req: &RespondRequest) -> Result<RespondResponse, ApiError> {
        let url = self.config.url(endpoints::SESSION_RESPOND);
        log::info!("POST {}", url);

        let request = Request::post(&url)
            .json(req)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    async fn status(&self, session_id: &str) -> Result<StatusResponse, ApiError> {
        let url = self.config.url(&endpoints::session_status(session_id));
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}
