//! Inference service seam and its OpenAI-compatible implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, Result};

/// "Complete this prompt": one prompt in, the model's reply text out.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Chat-completions client (Groq, OpenAI or any compatible endpoint).
pub struct ChatCompletionClient {
    http: Client,
    config: Arc<Config>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl CompletionService for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let settings = &self.config.inference;
        let api_key = settings
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Inference("no inference API key configured".to_string()))?;

        let url = format!("{}/chat/completions", settings.base_url.trim_end_matches('/'));
        let request = ChatRequest {
            model: &settings.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!("Requesting completion from {} ({} chars)", settings.model, prompt.len());
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Inference(format!("HTTP {}: {}", status.as_u16(), body)));
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Inference("response contained no completion".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InferenceConfig;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: String, api_key: Option<&str>) -> ChatCompletionClient {
        let config = Config {
            inference: InferenceConfig {
                api_key: api_key.map(str::to_string),
                base_url,
                model: "test-model".to_string(),
            },
            ..Config::default()
        };
        ChatCompletionClient::new(Arc::new(config)).unwrap()
    }

    #[tokio::test]
    async fn returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer key"))
            .and(body_partial_json(serde_json::json!({
                "model": "test-model",
                "messages": [{"role": "user", "content": "explain"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "# commented"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(server.uri(), Some("key")).complete("explain").await.unwrap();
        assert_eq!(reply, "# commented");
    }

    #[tokio::test]
    async fn error_status_is_an_inference_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = client(server.uri(), Some("key")).complete("x").await.unwrap_err();
        assert!(matches!(err, AppError::Inference(ref m) if m.contains("401")));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(server.uri(), None).complete("x").await.unwrap_err();
        assert!(matches!(err, AppError::Inference(_)));
    }
}
