//! Runtime configuration for the questionnaire page.

use shared::ApiClientConfig;

use crate::utils;

/// Link offered in the share dialog when the page does not set one.
pub const DEFAULT_SHARE_URL: &str = "https://form.powerconnect.me";

/// How long the Yes/No selection stays visible before the answer is sent.
pub const DEFAULT_YES_NO_DELAY_MS: u32 = 200;

/// `<meta>` tag overriding the API base URL (defaults to the page origin)
pub const API_BASE_META: &str = "questionnaire-api-base";

/// `<meta>` tag overriding the share link
pub const SHARE_URL_META: &str = "questionnaire-share-url";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for all service endpoints
    pub api_base: String,
    /// Link shown in the share dialog
    pub share_url: String,
    /// Delay between a Yes/No click and its submission
    pub yes_no_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            yes_no_delay_ms: DEFAULT_YES_NO_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Build from the current page: origin plus any `<meta>` overrides.
    pub fn from_document() -> Self {
        Self::default().with_overrides(
            Some(utils::meta_content(API_BASE_META).unwrap_or_else(utils::get_base_url)),
            utils::meta_content(SHARE_URL_META),
        )
    }

    pub fn with_overrides(mut self, api_base: Option<String>, share_url: Option<String>) -> Self {
        if let Some(base) = api_base {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(url) = share_url {
            self.share_url = url;
        }
        self
    }

    pub fn api_client_config(&self) -> ApiClientConfig {
        ApiClientConfig::new(self.api_base.clone())
    }
}
