use log::{debug, error};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::proxy::errors::{Product, ProxyError};

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Deserialize, Debug)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatReplyMessage>,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Serialize, Debug)]
struct MusicRequest<'a> {
    prompt: &'a str,
    duration_seconds: f64,
}

/// OpenAI-style chat-completion endpoint.
pub struct ChatClient<'a> {
    /// Shared HTTP client
    pub client: &'a reqwest::Client,
    /// Completions URL
    pub url: &'a str,
    /// Model name
    pub model: &'a str,
    /// Bearer token
    pub api_key: &'a str,
}

impl ChatClient<'_> {
    /// Send one system + user exchange and return the reply text, or `""` when
    /// the provider returned no content.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, ProxyError> {
        let response = self
            .client
            .post(self.url)
            .bearer_auth(self.api_key)
            .json(&ChatRequest {
                model: self.model,
                messages: [
                    ChatMessage {
                        role: "system",
                        content: system,
                    },
                    ChatMessage {
                        role: "user",
                        content: user,
                    },
                ],
            })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProxyError::RateLimited);
        }
        if status == StatusCode::PAYMENT_REQUIRED {
            return Err(ProxyError::OutOfCredits);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} {body}", status.as_u16());
            return Err(ProxyError::Provider {
                product: Product::Song,
                status: status.as_u16(),
                body,
            });
        }

        let data: ChatResponse = serde_json::from_slice(&response.bytes().await?)?;
        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();
        debug!("AI gateway replied with {} bytes", content.len());
        Ok(content)
    }
}

/// Text-to-music endpoint returning raw audio.
pub struct MusicClient<'a> {
    /// Shared HTTP client
    pub client: &'a reqwest::Client,
    /// Generation URL
    pub url: &'a str,
    /// Sent as `xi-api-key`
    pub api_key: &'a str,
}

impl MusicClient<'_> {
    /// Request `duration_seconds` of audio for `prompt`.
    pub async fn compose(
        &self,
        prompt: &str,
        duration_seconds: f64,
    ) -> Result<Vec<u8>, ProxyError> {
        let response = self
            .client
            .post(self.url)
            .header("xi-api-key", self.api_key)
            .json(&MusicRequest {
                prompt,
                duration_seconds,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Music provider error: {} {body}", status.as_u16());
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProxyError::RateLimited);
            }
            return Err(ProxyError::Provider {
                product: Product::Music,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
