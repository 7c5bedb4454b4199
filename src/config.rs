//! Configuration for the Perplexity client

use serde::{Deserialize, Serialize};

/// Base URL of the Perplexity API
pub const DEFAULT_API_BASE: &str
  = "https://api.perplexity.ai";

/// Environment variable consulted when no key is injected
pub const API_KEY_ENV_VAR: &str = "PERPLEXITY_API_KEY";

/// Perplexity client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerplexityConfig
{   /// API key; when None the environment variable
    /// PERPLEXITY_API_KEY is read at call time
    pub api_key: Option<String>
  , /// API base URL (if custom, e.g. a test server)
    pub api_base: String
  , /// Request timeout in seconds; None keeps the
    /// HTTP client defaults
    pub timeout_secs: Option<u64>
}

impl Default for PerplexityConfig
{   fn default() -> Self
    {   PerplexityConfig
        {   api_key: None
          , api_base: DEFAULT_API_BASE.to_string()
          , timeout_secs: None
        }
    }
}

impl PerplexityConfig
{   /// Configuration with an explicitly injected key
    pub fn with_api_key(key: String) -> Self
    {   PerplexityConfig
        {   api_key: Some(key)
          , ..Default::default()
        }
    }

    /// Configuration with the key taken from the environment
    /// right now, rather than at call time
    pub fn from_env() -> Self
    {   PerplexityConfig
        {   api_key: std::env::var(API_KEY_ENV_VAR).ok()
          , ..Default::default()
        }
    }
}
