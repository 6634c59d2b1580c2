/// LLM Client — the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the completions API directly.
/// All rewrite traffic MUST go through this module.
///
/// Model: text-davinci-002 (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const COMPLETIONS_API_URL: &str = "https://api.openai.com/v1/completions";
/// The model used for all rewrite calls.
pub const MODEL: &str = "text-davinci-002";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 215;
const TOP_P: f32 = 1.0;
const FREQUENCY_PENALTY: f32 = 0.0;
const PRESENCE_PENALTY: f32 = 0.0;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed completion payload: {0}")]
    Decode(String),
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    temperature: f32,
    max_tokens: u32,
    n: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single completions client used by the rewrite fan-out.
/// Sampling parameters are fixed; only the choice count varies per call.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Requests `n` independent completions for a prompt, returned in provider
    /// order. Single attempt, no retry: one failure fails this call only.
    /// Sampling is stochastic, so repeated calls may return different text.
    pub async fn complete(&self, prompt: String, n: u32) -> Result<Vec<String>, CompletionError> {
        let request_body = CompletionRequest {
            model: MODEL,
            prompt,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            n,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        };

        let response = self
            .client
            .post(COMPLETIONS_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's own error message when the body carries one
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::Decode(e.to_string()))?;

        debug!("Completion call succeeded: {} choices", completion.choices.len());

        Ok(completion.choices.into_iter().map(|c| c.text).collect())
    }
}
