use serde::{Deserialize, Serialize};

use super::Platform;

/// The form fields describing one post to generate.
///
/// Field names follow the JSON body accepted by `POST /api/generate-post`.
/// `platform`, `description` and `tone` are required. A missing flag counts
/// as off, and a missing `wordLimit` leaves the length unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub platform: Platform,
    pub description: String,
    pub tone: String,
    #[serde(default)]
    pub word_limit: Option<u32>,
    /// Only consulted when `platform` is twitter.
    #[serde(default)]
    pub make_thread: bool,
    #[serde(default)]
    pub include_hashtags: bool,
    #[serde(default)]
    pub include_emoji: bool,
}

impl PostRequest {
    /// Returns `true` when the request asks for a numbered twitter thread.
    pub fn is_thread(&self) -> bool {
        self.platform == Platform::Twitter && self.make_thread
    }
}
