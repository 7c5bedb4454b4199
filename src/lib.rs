pub mod error;
pub mod config;
pub mod request;
pub mod models;
pub mod providers;

/*

pplx is a small async-only rust library for talking to the
Perplexity AI chat completions api: one prompt in, one reply
string out. the core call never raises to the caller; every
failure is logged and collapsed to None, with a Result-returning
variant available for callers that want the cause.

pplx/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and main documentation
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Client configuration (key, base url, timeout)
│   ├── request.rs      # Caller-facing prompt options and defaults
│   ├── models.rs       # Known Perplexity models and pricing
│   └── providers/      # Provider-specific implementation
│       ├── mod.rs
│       └── perplexity.rs
├── demos/              # Example usage
└── tests/              # Integration tests

*/

pub use error::Error;
pub use config::PerplexityConfig;
pub use request::PromptOptions;
pub use models::{ModelInfo, DEFAULT_MODEL};
pub use providers::perplexity::PerplexityClient;
