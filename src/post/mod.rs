mod platform;
mod prompt;
mod request;
mod tone;

pub use platform::Platform;
pub use prompt::{ComposedPrompt, TWEET_CHAR_LIMIT, compose};
pub use request::PostRequest;
pub use tone::{TONE_PRESETS, print_tones};
