//! Remote generative client for workout plan drafts
//!
//! This module handles communication with the generative text service that
//! drafts a full plan from the user's settings. Every failure mode here is
//! recoverable: the generator falls back to the template path and never
//! surfaces these errors to the caller.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const DEFAULT_API_URL: &str = "https://toolkit.rork.com/text/llm/";
const API_URL_ENV_VAR: &str = "FITNESS_AI_URL";

const SYSTEM_PROMPT: &str = "You are a certified personal trainer and fitness expert. \
Create detailed, progressive workout plans that are safe and effective. \
Always respond with valid JSON only.";

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LlmError {
  #[error("Invalid endpoint configuration: {0}")]
  Config(String),

  #[error("Request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Parse error: {0}")]
  Parse(String),
}

/// ---------------------------------------------------------------------------
/// Wire Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest {
  messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
  role: String,
  content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  completion: String,
}

/// ---------------------------------------------------------------------------
/// Remote Plan Payload
/// ---------------------------------------------------------------------------

/// Plan shape as the generative service returns it. `weeks`, `days`, and
/// `exercises` are required; their absence is a parse failure that triggers
/// the template fallback. Identifiers are never taken from this payload.
#[derive(Debug, Deserialize)]
pub struct RemotePlan {
  pub name: Option<String>,
  pub weeks: Vec<RemoteWeek>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteWeek {
  pub name: Option<String>,
  pub days: Vec<RemoteDay>,
  #[serde(rename = "progressionNotes")]
  pub progression_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteDay {
  pub name: String,
  pub exercises: Vec<RemoteExercise>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteExercise {
  pub name: String,
  pub sets: Option<u32>,
  pub reps: Option<u32>,
}

/// ---------------------------------------------------------------------------
/// Coach Client
/// ---------------------------------------------------------------------------

pub struct CoachClient {
  client: Client,
  api_url: String,
}

impl CoachClient {
  /// Create a client against the default endpoint, honoring the
  /// `FITNESS_AI_URL` override from the environment or a `.env` file.
  pub fn from_env() -> Result<Self, LlmError> {
    dotenvy::dotenv().ok();

    let api_url =
      std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    Url::parse(&api_url).map_err(|e| LlmError::Config(format!("{}: {}", api_url, e)))?;

    Ok(Self {
      client: Client::new(),
      api_url,
    })
  }

  /// Create a client against an explicit endpoint (used by tests).
  pub fn with_api_url(api_url: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      api_url: api_url.into(),
    }
  }

  pub fn api_url(&self) -> &str {
    &self.api_url
  }

  /// Send the fixed trainer persona plus a user prompt, returning the raw
  /// completion text.
  pub async fn complete(&self, user_message: &str) -> Result<String, LlmError> {
    let request = ChatRequest {
      messages: vec![
        ChatMessage {
          role: "system".to_string(),
          content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
          role: "user".to_string(),
          content: user_message.to_string(),
        },
      ],
    };

    let response = self
      .client
      .post(&self.api_url)
      .json(&request)
      .send()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    if !status.is_success() {
      return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
    }

    let chat: ChatResponse =
      serde_json::from_str(&body).map_err(|e| LlmError::Parse(e.to_string()))?;

    Ok(chat.completion)
  }

  /// Ask the service for a plan draft and parse it into the remote shape.
  pub async fn draft_plan(&self, prompt: &str) -> Result<RemotePlan, LlmError> {
    let completion = self.complete(prompt).await?;

    let json_str = extract_json(&completion)?;

    let plan: RemotePlan = serde_json::from_str(&json_str)
      .map_err(|e| LlmError::Parse(format!("{}: {}", e, json_str)))?;

    if plan.weeks.is_empty() {
      return Err(LlmError::Parse("Plan draft contains no weeks".to_string()));
    }

    Ok(plan)
  }
}

/// Pull the JSON object out of a completion. Models asked for JSON-only
/// output still wrap it in markdown fences or surrounding chatter often
/// enough that the parser has to dig for it.
fn extract_json(text: &str) -> Result<String, LlmError> {
  let trimmed = text.trim();
  if trimmed.starts_with('{') {
    return Ok(trimmed.to_string());
  }

  if let Some(block) = fenced_block(trimmed) {
    return Ok(block.to_string());
  }

  // Widest brace span, but only when the braces are actually ordered; a
  // refusal can contain a stray `}` ahead of any `{`.
  if let (Some(open), Some(close)) = (trimmed.find('{'), trimmed.rfind('}')) {
    if open < close {
      return Ok(trimmed[open..=close].to_string());
    }
  }

  Err(LlmError::Parse("Could not extract JSON from completion".to_string()))
}

/// The body of the first ``` fence, tolerating a language tag after the
/// opening backticks.
fn fenced_block(text: &str) -> Option<&str> {
  let start = text.find("```")? + 3;
  let rest = &text[start..];
  let body = &rest[rest.find('\n').map(|i| i + 1).unwrap_or(0)..];
  let end = body.find("```")?;
  Some(body[..end].trim())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
