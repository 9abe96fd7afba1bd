//! HTTP client service
//!
//! Encapsulates HTTP communication with the Wikipedia action API

use crate::config::Settings;
use crate::models::Language;
use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Wikipedia action API client
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    settings: Settings,
}

impl WikiClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.wikipedia.timeout))
            .user_agent(settings.wikipedia.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Resolve the action API endpoint for a language edition
    pub fn endpoint(&self, language: Language) -> String {
        self.settings
            .wikipedia
            .endpoint_template
            .replace("{language}", language.code())
    }

    /// Issue one GET against the action API and deserialize the JSON body
    ///
    /// Exactly one outbound call; no retries. Non-success statuses and
    /// undecodable bodies surface as errors to the caller.
    pub async fn get<T: DeserializeOwned>(
        &self,
        language: Language,
        params: &[(&'static str, String)],
    ) -> AppResult<T> {
        let url = self.endpoint(language);
        debug!("GET {} with {} query parameters", url, params.len());

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;

        debug!("Action API request completed successfully");
        Ok(parsed)
    }
}
