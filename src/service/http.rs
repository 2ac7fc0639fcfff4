// src/service/http.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::AnalysisService;
use crate::analysis::{AnalysisError, AnalysisRequest, AnalysisResponse};
use crate::config::ServiceSettings;

/// Error bodies are only logged, and only this much of them.
const LOGGED_BODY_CHARS: usize = 512;

#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpAnalysisService {
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        let endpoint = settings.endpoint()?;
        let client = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            timeout: settings.timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, e: reqwest::Error) -> AnalysisError {
        if e.is_timeout() {
            AnalysisError::Timeout(self.timeout)
        } else {
            AnalysisError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting analysis request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let excerpt: String = body.chars().take(LOGGED_BODY_CHARS).collect();
            tracing::warn!(status = status.as_u16(), body = %excerpt, "Analysis service returned an error");
            return Err(AnalysisError::Status(status.as_u16()));
        }

        AnalysisResponse::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let settings = ServiceSettings {
            base_url: "http://127.0.0.1:8000/".into(),
            ..ServiceSettings::default()
        };
        let service = HttpAnalysisService::new(&settings).unwrap();
        assert_eq!(service.endpoint(), "http://127.0.0.1:8000/generate/result");
    }

    #[test]
    fn rejects_unusable_base_url() {
        let settings = ServiceSettings {
            base_url: "ftp://example.com".into(),
            ..ServiceSettings::default()
        };
        assert!(HttpAnalysisService::new(&settings).is_err());
    }
}
