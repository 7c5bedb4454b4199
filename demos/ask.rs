//! Minimal usage: send one prompt and print the reply
//!
//! Run with:
//!   PERPLEXITY_API_KEY=... cargo run --example ask

use pplx::{PerplexityClient, PromptOptions};

#[tokio::main]
async fn main()
{   env_logger::init();

    let client = PerplexityClient::new(None);
    let prompt = "How many stars are in the universe?";

    let result = client
      .send_prompt(prompt, &PromptOptions::default())
      .await;

    match result
    {   Some(text) => {
          println!("Received from Perplexity AI: {}", text);
        }
      , None => {
          println!("No response (see log for the cause)");
        }
    }
}
