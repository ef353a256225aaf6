use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::input::InputReader;
use crate::post::{Platform, PostRequest};

#[derive(Parser, Debug)]
#[command(name = "postgen")]
#[command(about = "AI-powered social media post generator")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service exposing POST /api/generate-post
    Serve {
        /// Address to listen on (e.g., 127.0.0.1:3000)
        #[arg(short = 'l', long)]
        listen: Option<String>,

        /// Provider name (from config file)
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Generate one or more posts
    Generate {
        #[command(flatten)]
        post: PostArgs,

        /// Provider name (from config file)
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Number of variations to generate concurrently
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
        variations: u8,

        /// Keep the variations that succeeded when others fail
        #[arg(long)]
        keep_partial: bool,

        /// Write the generated posts to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Print the prompts that would be sent, without calling the model
    Prompt {
        #[command(flatten)]
        post: PostArgs,
    },
    /// List preset tones
    Tones,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}

/// Word count sent for linkedin posts when `--words` is not given.
pub const LINKEDIN_WORD_LIMIT: u32 = 35;

/// Post options shared by `generate` and `prompt`.
#[derive(clap::Args, Debug, Clone)]
pub struct PostArgs {
    /// File holding the post topic (reads from stdin if neither this nor --description is given)
    pub file: Option<PathBuf>,

    /// Post topic
    #[arg(short = 'd', long, conflicts_with = "file")]
    pub description: Option<String>,

    /// Target platform (instagram, facebook, twitter, linkedin)
    #[arg(long, default_value = "twitter")]
    pub platform: String,

    /// Tone of voice (see `postgen tones`)
    #[arg(short = 't', long, default_value = "Professional")]
    pub tone: String,

    /// Approximate word count (linkedin defaults to 35, other platforms leave it open)
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub words: Option<u32>,

    /// Write a numbered thread (twitter only)
    #[arg(long)]
    pub thread: bool,

    /// Do not add hashtags
    #[arg(long)]
    pub no_hashtags: bool,

    /// Do not use emojis
    #[arg(long)]
    pub no_emoji: bool,
}

impl PostArgs {
    /// Builds the request, reading the description from the file or stdin if needed.
    pub fn to_post_request(&self) -> Result<PostRequest> {
        let description = match &self.description {
            Some(description) => description.clone(),
            None => InputReader::read(self.file.as_deref())?,
        };
        let description = description.trim();

        if description.is_empty() {
            bail!("Error: Post description is empty");
        }

        let platform = Platform::from(self.platform.as_str());
        if !platform.is_known() {
            tracing::warn!(
                "Unknown platform '{platform}', generating without platform-specific guidance"
            );
        }

        let word_limit = match platform {
            Platform::Linkedin => Some(self.words.unwrap_or(LINKEDIN_WORD_LIMIT)),
            _ => self.words,
        };

        Ok(PostRequest {
            platform,
            description: description.to_string(),
            tone: self.tone.clone(),
            word_limit,
            make_thread: self.thread,
            include_hashtags: !self.no_hashtags,
            include_emoji: !self.no_emoji,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("postgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_generate_defaults_mirror_form() {
        let Command::Generate {
            post, variations, ..
        } = parse(&["generate", "-d", "launch"]).command
        else {
            panic!("expected generate");
        };

        let request = post.to_post_request().unwrap();
        assert_eq!(request.platform, Platform::Twitter);
        assert_eq!(request.tone, "Professional");
        assert_eq!(request.word_limit, None);
        assert!(!request.make_thread);
        assert!(request.include_hashtags);
        assert!(request.include_emoji);
        assert_eq!(variations, 1);
    }

    #[test]
    fn test_prompt_flags() {
        let Command::Prompt { post } = parse(&[
            "prompt",
            "-d",
            "  hiring engineers  ",
            "--platform",
            "linkedin",
            "--tone",
            "Formal",
            "--words",
            "400",
            "--no-hashtags",
            "--no-emoji",
        ])
        .command
        else {
            panic!("expected prompt");
        };

        let request = post.to_post_request().unwrap();
        assert_eq!(request.platform, Platform::Linkedin);
        assert_eq!(request.description, "hiring engineers");
        assert_eq!(request.word_limit, Some(400));
        assert!(!request.include_hashtags);
        assert!(!request.include_emoji);
    }

    #[test]
    fn test_word_limit_defaults_only_for_linkedin() {
        let Command::Prompt { post } =
            parse(&["prompt", "-d", "hiring", "--platform", "linkedin"]).command
        else {
            panic!("expected prompt");
        };
        assert_eq!(post.to_post_request().unwrap().word_limit, Some(35));

        let Command::Prompt { post } =
            parse(&["prompt", "-d", "launch", "--platform", "instagram"]).command
        else {
            panic!("expected prompt");
        };
        assert_eq!(post.to_post_request().unwrap().word_limit, None);

        let Command::Prompt { post } = parse(&["prompt", "-d", "launch", "-w", "120"]).command
        else {
            panic!("expected prompt");
        };
        assert_eq!(post.to_post_request().unwrap().word_limit, Some(120));
    }

    #[test]
    fn test_empty_description_rejected() {
        let Command::Prompt { post } = parse(&["prompt", "-d", "   "]).command else {
            panic!("expected prompt");
        };

        assert!(post.to_post_request().is_err());
    }

    #[test]
    fn test_variation_count_is_bounded() {
        let result = Args::try_parse_from(["postgen", "generate", "-d", "x", "-n", "0"]);
        assert!(result.is_err());

        let result = Args::try_parse_from(["postgen", "generate", "-d", "x", "-n", "11"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_words_rejected() {
        let result = Args::try_parse_from(["postgen", "prompt", "-d", "x", "--words", "0"]);
        assert!(result.is_err());
    }
}
