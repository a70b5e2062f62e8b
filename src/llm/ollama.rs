use anyhow::{Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::BackendError;

use super::{CommitMessage, LlmClient, Tone, commit_message_prompt, parse_commit_message};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";

const BACKEND: &str = "Ollama";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

/// Synchronous Ollama client using /api/generate.
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
    timeout: Duration,
    health_timeout: Duration,
}

impl OllamaClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| anyhow!("failed to build HTTP client: {e}"))?;

        let base_url = base_url.into();
        let base_url = if base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base_url.trim_end_matches('/').to_string()
        };

        let model = model.into();
        let model = if model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model
        };

        Ok(Self {
            http,
            base_url,
            model,
            timeout,
            health_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Internal helper to talk to /api/generate.
    fn generate(&self, prompt: String) -> Result<String, BackendError> {
        let req_body = GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
        };

        let body_str = serde_json::to_string(&req_body).map_err(|e| BackendError::Encode {
            backend: BACKEND,
            reason: e.to_string(),
        })?;

        log::trace!("Ollama request body: {body_str}");

        let url = format!("{}/api/generate", self.base_url);
        log::debug!("Making request to: {url}");

        let resp = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| self.request_error(&url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(BackendError::Status {
                backend: BACKEND,
                url,
                status: status.as_u16(),
                body,
            });
        }

        let resp_text = resp.text().map_err(|e| self.request_error(&url, e))?;

        log::trace!("Ollama raw JSON response: {resp_text}");

        let parsed: GenerateResponse = serde_json::from_str(&resp_text).map_err(|e| BackendError::Decode {
            backend: BACKEND,
            reason: e.to_string(),
        })?;

        Ok(parsed.response)
    }

    fn request_error(&self, url: &str, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                backend: BACKEND,
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            BackendError::Transport {
                backend: BACKEND,
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

impl LlmClient for OllamaClient {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn health_check(&self) -> Result<(), BackendError> {
        let url = format!("{}/api/tags", self.base_url);
        let unavailable = |reason: String| BackendError::Unavailable {
            backend: BACKEND,
            url: self.base_url.clone(),
            reason,
        };

        let resp = self
            .http
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        if resp.status() != reqwest::StatusCode::OK {
            return Err(unavailable(format!(
                "health check failed with status: {}",
                resp.status().as_u16()
            )));
        }

        Ok(())
    }

    fn generate_commit_message(&self, diff: &str, tone: &Tone) -> Result<CommitMessage, BackendError> {
        let prompt = commit_message_prompt(diff, tone);
        log::trace!("Commit message prompt:\n{prompt}");

        let raw = self.generate(prompt)?;
        Ok(parse_commit_message(&raw))
    }
}
