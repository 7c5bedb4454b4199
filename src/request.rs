//! Caller-facing prompt parameters and their defaults

use serde::{Deserialize, Serialize};

/// Generation parameters for a single prompt dispatch
///
/// Only `model` and `max_tokens` are transmitted by the active
/// request path. `temperature`, `top_p` and `stream` are accepted
/// for signature compatibility with the detailed request variant,
/// which is not enabled; passing them has no effect on the wire
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptOptions
{   /// Model identifier
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: usize
  , /// Controls randomness in the response; lower values
    /// are more deterministic (inert in the active path)
    pub temperature: f32
  , /// Nucleus sampling threshold (inert in the active path)
    pub top_p: f32
  , /// Incremental streaming (inert; streaming is unimplemented)
    pub stream: bool
}

impl Default for PromptOptions
{   fn default() -> Self
    {   PromptOptions
        {   model: crate::models::DEFAULT_MODEL.to_string()
          , max_tokens: 1000
          , temperature: 1.0
          , top_p: 1.0
          , stream: false
        }
    }
}

impl PromptOptions
{   /// Default options with a different model
    pub fn with_model(model: &str) -> Self
    {   PromptOptions
        {   model: model.to_string()
          , ..Default::default()
        }
    }
}
