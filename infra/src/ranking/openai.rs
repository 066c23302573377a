//! OpenAI chat-completions ranking client
//!
//! Implements [`RankingEngine`] by asking a chat model to re-rank the
//! candidate shortlist. The model is instructed to reply with bare JSON;
//! replies that are not valid JSON are handled upstream in
//! [`RecommendationResult::from_model_reply`] and never fail the request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use ds_core::domain::entities::place::PlaceCandidate;
use ds_core::domain::entities::recommendation::RecommendationResult;
use ds_core::errors::{DomainError, RecommendationError};
use ds_core::services::recommendation::RankingEngine;
use ds_shared::config::RankingConfig;

/// Chat completions endpoint
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used for re-ranking
const RANKING_MODEL: &str = "gpt-4";

/// Instruction that pins the reply to bare JSON under a fixed key
const SYSTEM_PROMPT: &str = "You are a travel assistant. Respond ONLY with valid JSON inside an \
                             object with a 'recommendations' key. No extra text or explanations.";

/// OpenAI implementation of the ranking engine
pub struct OpenAiRankingClient {
    config: RankingConfig,
    client: reqwest::Client,
}

impl OpenAiRankingClient {
    /// Create a new client with the given configuration
    pub fn new(config: RankingConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Self {
        Self::new(RankingConfig::from_env())
    }
}

/// Chat completions request body
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completions response body, reduced to the fields used here
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Build the user prompt embedding the serialized shortlist
fn ranking_prompt(candidates: &[PlaceCandidate]) -> Result<String, DomainError> {
    let payload = serde_json::to_string(candidates).map_err(|error| DomainError::Internal {
        message: format!("Failed to serialize candidates: {}", error),
    })?;

    Ok(format!(
        "Here is a list of restaurants: {}. Recommend the best ones in JSON format.",
        payload
    ))
}

/// Pull the first choice's content out of a completion
fn extract_reply(body: ChatResponse) -> Result<String, RecommendationError> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| RecommendationError::RankingUpstream {
            detail: "completion contained no choices".to_string(),
        })
}

fn ranking_unavailable(error: reqwest::Error) -> DomainError {
    tracing::error!(error = %error, "ranking request failed");
    RecommendationError::RankingUpstream {
        detail: error.to_string(),
    }
    .into()
}

#[async_trait]
impl RankingEngine for OpenAiRankingClient {
    async fn rank(
        &self,
        candidates: &[PlaceCandidate],
    ) -> Result<RecommendationResult, DomainError> {
        let request = ChatRequest {
            model: RANKING_MODEL,
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(ranking_prompt(candidates)?),
            ],
        };

        tracing::debug!(candidates = candidates.len(), model = RANKING_MODEL, "requesting ranking");

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ranking_unavailable)?
            .error_for_status()
            .map_err(ranking_unavailable)?;

        let body: ChatResponse = response.json().await.map_err(ranking_unavailable)?;
        let reply = extract_reply(body)?;

        Ok(RecommendationResult::from_model_reply(&reply))
    }
}
