//! Concurrent generation of several variations of the same post.

use anyhow::{Context, Result, bail};
use futures_util::future::{join_all, try_join_all};

use super::{CompletionClient, CompletionRequest};

/// How the results of concurrent variations are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// The first failure discards every other result.
    #[default]
    FailFast,
    /// Wait for every variation and keep the ones that succeeded.
    Settled,
}

/// Result of a single variation.
#[derive(Debug)]
pub enum VariationOutcome {
    Generated(String),
    Failed(anyhow::Error),
}

impl VariationOutcome {
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Generated(content) => Some(content),
            Self::Failed(_) => None,
        }
    }
}

/// Issues `count` independent completions for `request` concurrently.
///
/// Outcomes are returned in request order. With [`JoinPolicy::FailFast`] every
/// outcome is `Generated` or the call errors. With [`JoinPolicy::Settled`] the
/// call only errors when no variation succeeded.
pub async fn generate_variations(
    client: &dyn CompletionClient,
    request: &CompletionRequest,
    count: usize,
    policy: JoinPolicy,
) -> Result<Vec<VariationOutcome>> {
    if count == 0 {
        bail!("Variation count must be at least 1");
    }

    let calls = (1..=count).map(|n| async move {
        client
            .complete(request)
            .await
            .with_context(|| format!("Variation {n} of {count} failed"))
    });

    match policy {
        JoinPolicy::FailFast => {
            let contents = try_join_all(calls).await?;
            Ok(contents
                .into_iter()
                .map(VariationOutcome::Generated)
                .collect())
        }
        JoinPolicy::Settled => {
            let outcomes: Vec<_> = join_all(calls)
                .await
                .into_iter()
                .map(|result| match result {
                    Ok(content) => VariationOutcome::Generated(content),
                    Err(e) => {
                        tracing::warn!("{e:#}");
                        VariationOutcome::Failed(e)
                    }
                })
                .collect();

            if outcomes.iter().all(|o| o.content().is_none()) {
                bail!("All {count} variations failed");
            }
            Ok(outcomes)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::post::{Platform, PostRequest};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails every call whose 1-based sequence number is listed in `fail_on`.
    struct ScriptedClient {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
    }

    impl ScriptedClient {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&n) {
                bail!("simulated network failure");
            }
            Ok(format!("post {n}"))
        }
    }

    fn request() -> CompletionRequest {
        let post = PostRequest {
            platform: Platform::Twitter,
            description: "release notes".to_string(),
            tone: "Casual".to_string(),
            word_limit: Some(50),
            make_thread: false,
            include_hashtags: false,
            include_emoji: false,
        };
        CompletionRequest::for_post(&post, "test-model", 0.7)
    }

    #[tokio::test]
    async fn test_fail_fast_all_succeed() {
        let client = ScriptedClient::new(vec![]);

        let outcomes = generate_variations(&client, &request(), 3, JoinPolicy::FailFast)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.content().is_some()));
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fail_fast_discards_results_on_failure() {
        let client = ScriptedClient::new(vec![2]);

        let err = generate_variations(&client, &request(), 3, JoinPolicy::FailFast)
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("simulated network failure"));
    }

    #[tokio::test]
    async fn test_settled_keeps_partial_results() {
        let client = ScriptedClient::new(vec![2]);

        let outcomes = generate_variations(&client, &request(), 3, JoinPolicy::Settled)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        let generated = outcomes.iter().filter_map(VariationOutcome::content).count();
        assert_eq!(generated, 2);
        assert!(
            outcomes
                .iter()
                .any(|o| matches!(o, VariationOutcome::Failed(_)))
        );
    }

    #[tokio::test]
    async fn test_settled_all_failed_is_error() {
        let client = ScriptedClient::new(vec![1, 2]);

        let err = generate_variations(&client, &request(), 2, JoinPolicy::Settled)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("All 2 variations failed"));
    }

    #[tokio::test]
    async fn test_zero_count_is_rejected() {
        let client = ScriptedClient::new(vec![]);

        let result = generate_variations(&client, &request(), 0, JoinPolicy::FailFast).await;

        assert!(result.is_err());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }
}
