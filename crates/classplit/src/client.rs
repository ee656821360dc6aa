use crate::prelude::*;
use classplit_core::completion::{extract_content, CompletionRequest};
use reqwest::StatusCode;

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Send one request and return the first choice's message content.
    ///
    /// Any status other than `200 OK` is returned as [`Error::Status`] without
    /// reading the body.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        log::debug!("completion response: {} bytes", body.len());

        extract_content(&body).map_err(|e| Error::Response(e.to_string()))
    }
}
