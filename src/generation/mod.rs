mod client;
mod variations;

pub use client::{CompletionClient, CompletionRequest, OpenAiClient};
pub use variations::{JoinPolicy, VariationOutcome, generate_variations};
