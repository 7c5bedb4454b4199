//! Known Perplexity chat completion models
//!
//! Pricing and context lengths as of 24.04.22; see
//! https://docs.perplexity.ai/docs/pricing for current figures.

/// Model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "llama-3-70b-instruct";

/// Information about a model's limits and pricing
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo
{   /// Model identifier (e.g., "llama-3-70b-instruct")
    pub name: &'static str
  , /// Maximum context window (in tokens)
    pub max_context_tokens: usize
  , /// Cost per 1M tokens (in USD)
    pub cost_per_million_tokens: Option<f32>
  , /// Cost per 1000 requests (in USD); only the online
    /// models carry a per-request charge
    pub cost_per_thousand_requests: Option<f32>
}

/// All models documented for the chat completions endpoint
pub fn known_models() -> Vec<ModelInfo>
{   vec![
      ModelInfo
      {   name: "llama-3-70b-instruct"
        , max_context_tokens: 8192
        , cost_per_million_tokens: Some(1.00)
        , cost_per_thousand_requests: None
      }
    , ModelInfo
      {   name: "llama-3-8b-instruct"
        , max_context_tokens: 8192
        , cost_per_million_tokens: Some(0.20)
        , cost_per_thousand_requests: None
      }
    , ModelInfo
      {   name: "codellama-70b-instruct"
        , max_context_tokens: 16384
        , cost_per_million_tokens: Some(1.00)
        , cost_per_thousand_requests: None
      }
    , ModelInfo
      {   name: "sonar-small-chat"
        , max_context_tokens: 16384
        , cost_per_million_tokens: Some(0.20)
        , cost_per_thousand_requests: None
      }
    , ModelInfo
      {   name: "sonar-medium-chat"
        , max_context_tokens: 16384
        , cost_per_million_tokens: Some(0.60)
        , cost_per_thousand_requests: None
      }
    , ModelInfo
      {   name: "sonar-small-online"
        , max_context_tokens: 12000
        , cost_per_million_tokens: Some(0.20)
        , cost_per_thousand_requests: Some(5.0)
      }
    , ModelInfo
      {   name: "sonar-medium-online"
        , max_context_tokens: 12000
        , cost_per_million_tokens: Some(0.60)
        , cost_per_thousand_requests: Some(5.0)
      }
    ]
}

/// Look up a model by identifier
pub fn model_info(name: &str) -> Option<ModelInfo>
{   known_models()
      .into_iter()
      .find(|m| m.name == name)
}

/// Default model info for Perplexity
pub fn default_model_info() -> ModelInfo
{   ModelInfo
    {   name: DEFAULT_MODEL
      , max_context_tokens: 8192
      , cost_per_million_tokens: Some(1.00)
      , cost_per_thousand_requests: None
    }
}
