/*!
 * Bounded exponential-backoff retry around model invocations.
 *
 * Rate-limit failures are the only retryable kind; every other provider error
 * propagates immediately.
 */

use std::time::Duration;

use log::warn;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Retry policy for model invocations
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one
    pub max_retries: u32,

    /// Base backoff delay, doubled on each retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Backoff delay before the retry following the given 0-based attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Invoke the provider with bounded retry on rate-limit failures.
///
/// On success the reply is returned with surrounding whitespace trimmed. A
/// rate-limit failure on the last allowed attempt propagates unchanged; any
/// other failure kind propagates without retrying.
pub async fn generate_with_retry<P>(
    provider: &P,
    prompt: &str,
    policy: &RetryPolicy,
) -> Result<String, ProviderError>
where
    P: Provider + ?Sized,
{
    let mut attempt: u32 = 0;

    loop {
        match provider.generate(prompt).await {
            Ok(reply) => return Ok(reply.trim().to_string()),
            Err(ProviderError::RateLimitExceeded(message)) => {
                if attempt + 1 >= policy.max_retries {
                    return Err(ProviderError::RateLimitExceeded(message));
                }

                let delay = policy.delay_for(attempt);
                warn!(
                    "Rate limit exceeded, retrying in {:?} - attempt {}/{}",
                    delay,
                    attempt + 1,
                    policy.max_retries
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
