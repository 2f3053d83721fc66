use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    entities::PlaceCandidate,
    error::{generation_failure_error, invalid_input_error, upstream_error, Error},
    external::Generator,
    prompt::extract_candidates,
};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiGenerator {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    #[tracing::instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<Vec<PlaceCandidate>, Error> {
        let url = format!("https://{}/v1/chat/completions", self.api_base);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };

        let res = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: ChatResponse = res.json().await?;

        let text = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(generation_failure_error)?;

        tracing::debug!("generation returned {} characters", text.len());

        Ok(extract_candidates(&text))
    }
}

/// Stands in when no generation service is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

#[async_trait]
impl Generator for Unavailable {
    async fn generate(&self, _prompt: &str) -> Result<Vec<PlaceCandidate>, Error> {
        Err(generation_failure_error())
    }
}
