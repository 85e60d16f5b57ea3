/*!
 * Tests for the bounded exponential-backoff retry loop.
 *
 * All timing assertions run under tokio's paused clock, so backoff sleeps
 * elapse in virtual time and the exact totals can be asserted.
 */

use std::time::Duration;

use entitle::analysis::retry::{RetryPolicy, generate_with_retry};
use entitle::errors::ProviderError;

use crate::common::mock_provider::MockProvider;

/// Test the backoff delay formula
#[test]
fn test_delay_for_withDefaultPolicy_shouldDoublePerAttempt() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.delay_for(0), Duration::from_secs(2));
    assert_eq!(policy.delay_for(1), Duration::from_secs(4));
    assert_eq!(policy.delay_for(2), Duration::from_secs(8));
    assert_eq!(policy.delay_for(3), Duration::from_secs(16));
}

/// Test that a successful reply is trimmed and returned on the first attempt
#[tokio::test]
async fn test_generate_with_retry_withWorkingProvider_shouldTrimReply() {
    let provider = MockProvider::working("  Meeting Notes \n");
    let policy = RetryPolicy::default();

    let reply = generate_with_retry(&provider, "prompt", &policy).await.unwrap();

    assert_eq!(reply, "Meeting Notes");
    assert_eq!(provider.attempts(), 1);
}

/// Test that persistent rate limiting exhausts exactly max_retries attempts
/// and that the total backoff matches the geometric sum
#[tokio::test(start_paused = true)]
async fn test_generate_with_retry_withPersistentRateLimit_shouldExhaustRetries() {
    let provider = MockProvider::always_rate_limited();
    let policy = RetryPolicy::default();

    let start = tokio::time::Instant::now();
    let result = generate_with_retry(&provider, "prompt", &policy).await;

    assert!(matches!(result, Err(ProviderError::RateLimitExceeded(_))));
    assert_eq!(provider.attempts(), 5);
    // 2 + 4 + 8 + 16 seconds of backoff between the 5 attempts
    assert_eq!(start.elapsed(), Duration::from_secs(30));
}

/// Test that a rate limit clearing after two failures leads to recovery
/// with exactly two backoff sleeps
#[tokio::test(start_paused = true)]
async fn test_generate_with_retry_withTwoRateLimits_shouldRecover() {
    let provider = MockProvider::rate_limited_then_working(2, "ok title");
    let policy = RetryPolicy::default();

    let start = tokio::time::Instant::now();
    let reply = generate_with_retry(&provider, "prompt", &policy).await.unwrap();

    assert_eq!(reply, "ok title");
    assert_eq!(provider.attempts(), 3);
    // 2 + 4 seconds of backoff before the successful third attempt
    assert_eq!(start.elapsed(), Duration::from_secs(6));
}

/// Test that a non-rate-limit failure is not retried
#[tokio::test(start_paused = true)]
async fn test_generate_with_retry_withNonRetryableError_shouldFailImmediately() {
    let provider = MockProvider::failing();
    let policy = RetryPolicy::default();

    let start = tokio::time::Instant::now();
    let result = generate_with_retry(&provider, "prompt", &policy).await;

    assert!(matches!(
        result,
        Err(ProviderError::ApiError { status_code: 500, .. })
    ));
    assert_eq!(provider.attempts(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

/// Test that a custom policy bounds the attempt count
#[tokio::test(start_paused = true)]
async fn test_generate_with_retry_withCustomPolicy_shouldHonorMaxRetries() {
    let provider = MockProvider::always_rate_limited();
    let policy = RetryPolicy::new(3, Duration::from_millis(100));

    let start = tokio::time::Instant::now();
    let result = generate_with_retry(&provider, "prompt", &policy).await;

    assert!(result.is_err());
    assert_eq!(provider.attempts(), 3);
    // 100ms + 200ms of backoff between the 3 attempts
    assert_eq!(start.elapsed(), Duration::from_millis(300));
}
