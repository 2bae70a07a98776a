//! Single-shot Anthropic messages-API client.
//!
//! One request, one reply, no retries. All request knobs come in through
//! the constructor; the client holds no process-global state.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use tally_core::{Result, TallyError};

use crate::config::LlmSection;

pub struct ClaudeClient {
    http: reqwest::Client,
    model: String,
    base_url: String,
    max_tokens: u32,
    temperature: f32,
    api_key: String,
}

impl ClaudeClient {
    pub fn new(llm: &LlmSection, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            model: llm.model.clone(),
            base_url: llm.base_url.trim_end_matches('/').to_string(),
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            api_key,
        }
    }

    /// Send the categorization prompt as a single user-role message and
    /// return the reply text.
    pub async fn categorize(&self, prompt: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            max_tokens: u32,
            temperature: f32,
            messages: Vec<Msg<'a>>,
        }

        #[derive(Deserialize)]
        struct Resp {
            content: Vec<ContentBlock>,
        }

        #[derive(Deserialize)]
        struct ContentBlock {
            #[serde(rename = "type")]
            t: String,
            text: Option<String>,
        }

        let body = Req {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Msg {
                role: "user",
                content: prompt,
            }],
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| TallyError::Authentication(format!("unusable API key: {e}")))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static("2023-06-01"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        log::debug!(
            "POST {}/v1/messages model={} prompt={} chars",
            self.base_url,
            self.model,
            prompt.len()
        );

        let resp = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| TallyError::Service(format!("request failed: {e}")))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let txt = resp.text().await.unwrap_or_default();
            return Err(TallyError::Authentication(format!("{status}: {txt}")));
        }
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(TallyError::Service(format!("{status}: {txt}")));
        }

        let out: Resp = resp
            .json()
            .await
            .map_err(|e| TallyError::Service(format!("unexpected response shape: {e}")))?;

        let mut reply = String::new();
        for block in out.content {
            if block.t == "text" {
                if let Some(text) = block.text {
                    reply.push_str(&text);
                }
            }
        }

        let reply = reply.trim().to_string();
        if reply.is_empty() {
            return Err(TallyError::EmptyReply);
        }

        log::debug!("reply: {} chars", reply.len());
        Ok(reply)
    }
}
