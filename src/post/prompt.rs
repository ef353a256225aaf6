//! Prompt composition for post generation.
//!
//! Turns a [`PostRequest`] into the system and user messages of a chat
//! completion. Composition is pure: the same request always yields the same
//! pair of strings, and no combination of fields is rejected.

use super::{Platform, PostRequest};

/// Upper bound the platform enforces on a single tweet.
pub const TWEET_CHAR_LIMIT: usize = 280;

/// The two messages sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// Persona and constraints for the `system` role.
    pub system: String,
    /// The writing task for the `user` role.
    pub user: String,
}

/// Builds the system and user prompts for a request.
pub fn compose(request: &PostRequest) -> ComposedPrompt {
    let tone = request.tone.to_lowercase();

    ComposedPrompt {
        system: system_prompt(request, &tone),
        user: user_prompt(request, &tone),
    }
}

fn user_prompt(request: &PostRequest, tone: &str) -> String {
    let mut prompt = base_prompt(request, tone);

    if let Some(notes) = platform_notes(request) {
        prompt.push_str("\nAdditional notes:");
        for note in notes {
            prompt.push_str("\n- ");
            prompt.push_str(&note);
        }
    }

    prompt
}

fn base_prompt(request: &PostRequest, tone: &str) -> String {
    let mut lines = vec![
        format!(
            "Write a {} post about: {}",
            request.platform, request.description
        ),
        String::new(),
        "Key guidelines:".to_string(),
        format!("- Write in a {tone} tone"),
    ];

    if let Some(words) = request.word_limit {
        lines.push(format!("- Aim for approximately {words} words"));
    }

    lines.push("- Write in a natural, conversational style".to_string());
    lines.push("- Use simple, everyday language".to_string());
    lines.push(
        if request.include_emoji {
            "- Include relevant emojis where appropriate"
        } else {
            "- Do not use any emojis"
        }
        .to_string(),
    );
    lines.push(
        if request.include_hashtags {
            "- Add relevant hashtags at the end"
        } else {
            "- Do not include any hashtags"
        }
        .to_string(),
    );

    lines.join("\n")
}

/// Platform-specific notes appended after the base guidelines.
///
/// `None` for platforms without dedicated guidance.
fn platform_notes(request: &PostRequest) -> Option<Vec<String>> {
    let hashtags = request.include_hashtags;

    let (mut notes, hashtag_note): (Vec<String>, Option<&str>) = match &request.platform {
        Platform::Instagram => (
            vec![
                "Focus on visual storytelling".into(),
                "Keep the tone engaging and authentic".into(),
            ],
            Some("Add 3-5 relevant hashtags at the end"),
        ),
        Platform::Facebook => (
            vec![
                "Write in a personal, engaging style".into(),
                "Share insights or experiences naturally".into(),
                "Add a subtle call-to-action if relevant".into(),
            ],
            Some("Add 1-2 relevant hashtags if needed"),
        ),
        Platform::Twitter if request.is_thread() => (
            vec![
                "Break this into 3-5 connected tweets".into(),
                "Each tweet should flow naturally into the next".into(),
                format!("Keep each tweet under {TWEET_CHAR_LIMIT} characters"),
                "Number each tweet".into(),
                "Focus on telling a coherent story across the thread".into(),
            ],
            None,
        ),
        Platform::Twitter => (
            vec![
                format!("Keep it under {TWEET_CHAR_LIMIT} characters"),
                "Make it engaging and shareable".into(),
            ],
            Some("Add 1-2 relevant hashtags"),
        ),
        Platform::Linkedin => (
            vec![
                "Maintain a professional tone".into(),
                "Include industry insights if relevant".into(),
                "Focus on value and expertise".into(),
                "Keep paragraphs short and scannable".into(),
            ],
            Some("Add 2-3 relevant professional hashtags"),
        ),
        Platform::Other(_) => return None,
    };

    if hashtags && let Some(note) = hashtag_note {
        notes.push(note.to_string());
    }

    Some(notes)
}

fn system_prompt(request: &PostRequest, tone: &str) -> String {
    let emoji_policy = if request.include_emoji {
        "Use emojis thoughtfully and sparingly"
    } else {
        "Avoid using emojis"
    };
    let hashtag_policy = if request.include_hashtags {
        "Include relevant hashtags that add value"
    } else {
        "Exclude hashtags"
    };

    let mut prompt = format!(
        "You are a skilled social media writer who creates {tone} content that resonates with the audience. Your writing should:\n\
         \n\
         - Maintain a consistent {tone} tone throughout\n\
         - Use natural, conversational language\n\
         - Be concise and impactful\n\
         - {emoji_policy}\n\
         - {hashtag_policy}\n\
         - Express emotions and enthusiasm through well-crafted words\n\
         - Focus on creating genuine connections with the audience"
    );

    if let Some(closing) = closing_clause(request) {
        prompt.push_str("\n\n");
        prompt.push_str(closing);
    }

    prompt
}

fn closing_clause(request: &PostRequest) -> Option<&'static str> {
    if request.platform == Platform::Linkedin {
        Some("For LinkedIn, maintain professionalism while being approachable and authentic.")
    } else if request.is_thread() {
        Some(
            "For Twitter threads, maintain a natural flow between tweets while keeping each one engaging.",
        )
    } else {
        None
    }
}
