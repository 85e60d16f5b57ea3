/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working(reply)` - Always succeeds with the given reply
 * - `MockProvider::rate_limited_then_working(n, reply)` - Fails n times with a
 *   rate-limit error, then succeeds
 * - `MockProvider::always_rate_limited()` - Always fails with a rate-limit error
 * - `MockProvider::failing()` - Always fails with a non-retryable error
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use entitle::errors::ProviderError;
use entitle::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always succeeds with the given reply
    Working { reply: String },
    /// Fails with a rate-limit error for the first `failures` requests
    RateLimitedThenWorking { failures: usize, reply: String },
    /// Always fails with a rate-limit error
    AlwaysRateLimited,
    /// Always fails with a non-retryable API error
    Failing,
}

/// Mock provider for testing the analysis pipeline
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always replies with `reply`
    pub fn working(reply: impl Into<String>) -> Self {
        Self::new(MockBehavior::Working {
            reply: reply.into(),
        })
    }

    /// Create a mock that rate-limits the first `failures` requests
    pub fn rate_limited_then_working(failures: usize, reply: impl Into<String>) -> Self {
        Self::new(MockBehavior::RateLimitedThenWorking {
            failures,
            reply: reply.into(),
        })
    }

    /// Create a mock that always fails with a rate-limit error
    pub fn always_rate_limited() -> Self {
        Self::new(MockBehavior::AlwaysRateLimited)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of generate calls made so far
    pub fn attempts(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { reply } => Ok(reply.clone()),

            MockBehavior::RateLimitedThenWorking { failures, reply } => {
                if count < *failures {
                    Err(ProviderError::RateLimitExceeded(format!(
                        "Simulated rate limit (request #{})",
                        count + 1
                    )))
                } else {
                    Ok(reply.clone())
                }
            }

            MockBehavior::AlwaysRateLimited => Err(ProviderError::RateLimitExceeded(
                "Simulated rate limit".to_string(),
            )),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
        }
    }
}
