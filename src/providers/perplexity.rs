use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

/// Fixed system instruction sent ahead of every user prompt
const SYSTEM_INSTRUCTION: &str = "Be precise and concise.";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerplexityChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
}

// Detailed request variant with full control over generation;
// not enabled. When this path is turned on, temperature, top_p
// and stream from PromptOptions start reaching the wire.
//
// #[derive(Debug, Clone, Serialize, Deserialize)]
// pub struct PerplexityDetailedChatRequest
// {   pub model: String
//   , pub messages: Vec<ChatMessage>
//   , pub max_tokens: usize
//   , pub temperature: f32
//   , pub top_p: f32
//   , pub top_k: usize
//   , pub stream: bool
//   , pub presence_penalty: f32
//   , pub frequency_penalty: f32
// }

#[derive(Debug, Clone, Deserialize)]
pub struct PerplexityChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

/// Build the wire request for a prompt
///
/// The body carries exactly two messages, system instruction
/// first, then the user prompt. Only model and max_tokens from
/// the options are transmitted; the sampling fields belong to
/// the disabled detailed variant.
pub fn build_chat_request(
  prompt: &str
, options: &crate::request::PromptOptions
) -> PerplexityChatRequest
{   PerplexityChatRequest
    {   model: options.model.clone()
      , messages: vec![
          ChatMessage
          {   role: "system".to_string()
            , content: SYSTEM_INSTRUCTION.to_string()
          }
        , ChatMessage
          {   role: "user".to_string()
            , content: prompt.to_string()
          }
        ]
      , max_tokens: options.max_tokens
    }
}

// ===== Perplexity Client =====

/// Client for the Perplexity chat completions endpoint
pub struct PerplexityClient
{   api_key: Option<String>
  , api_base: String
  , http_client: reqwest::Client
}

impl PerplexityClient
{   /// Create a client against the production endpoint
    pub fn new(api_key: Option<String>) -> Self
    {   debug!("Creating PerplexityClient");
        PerplexityClient
        {   api_key
          , api_base: crate::config::DEFAULT_API_BASE
              .to_string()
          , http_client: reqwest::Client::new()
        }
    }

    /// Create a client from an explicit configuration
    pub fn from_config(
      config: crate::config::PerplexityConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!(
          "Creating PerplexityClient for base: {}",
          config.api_base
        );
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(
              std::time::Duration::from_secs(secs)
            );
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(
            e.to_string()
          )
        })?;

        Ok(PerplexityClient
        {   api_key: config.api_key
          , api_base: config.api_base
          , http_client
        })
    }

    /// Replace the injected API key
    pub fn set_api_key(&mut self, key: String)
    {   debug!("Setting API key");
        self.api_key = Some(key);
    }

    /// Injected key wins; otherwise the environment is read
    /// at call time
    fn resolve_api_key(&self)
      -> Result<String, crate::error::Error>
    {   if let Some(key) = &self.api_key
        {   debug!("Using injected API key");
            return Ok(key.clone());
        }

        if let Ok(key)
          = std::env::var(crate::config::API_KEY_ENV_VAR)
        {   debug!(
              "Using API key from {}",
              crate::config::API_KEY_ENV_VAR
            );
            return Ok(key);
        }

        error!(
          "No API key injected and {} not set",
          crate::config::API_KEY_ENV_VAR
        );
        Err(crate::error::Error::MissingApiKey(
          format!(
            "set {} or inject a key",
            crate::config::API_KEY_ENV_VAR
          )
        ))
    }

    /// Send a prompt and surface the failure cause
    ///
    /// Same request path as send_prompt, with the error
    /// taxonomy exposed instead of collapsed to None.
    pub async fn try_send_prompt(
      &self
    , prompt: &str
    , options: &crate::request::PromptOptions
    ) -> Result<String, crate::error::Error>
    {   debug!(
          "Dispatching prompt to model: {}",
          options.model
        );

        let api_key = self.resolve_api_key()?;
        let request = build_chat_request(prompt, options);

        trace!("Perplexity request: {:?}", request);

        let response = self.http_client
          .post(format!(
            "{}{}", self.api_base, CHAT_COMPLETIONS_PATH
          ))
          .header("Accept", "application/json")
          .header("Content-Type", "application/json")
          .header("Authorization", format!("Bearer {}", api_key))
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Perplexity response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Perplexity API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!("{}: {}", status, error_text)
            ));
        }

        let chat_response: PerplexityChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        chat_response.choices.first()
          .map(|c| c.message.content.clone())
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }

    /// Send a prompt; on any failure log and return None
    ///
    /// Callers cannot distinguish failure causes from the
    /// return value alone; use try_send_prompt for that.
    pub async fn send_prompt(
      &self
    , prompt: &str
    , options: &crate::request::PromptOptions
    ) -> Option<String>
    {   match self.try_send_prompt(prompt, options).await
        {   Ok(text) => Some(text)
          , Err(e) => {
              error!("An error occurred: {}", e);
              None
            }
        }
    }
}
