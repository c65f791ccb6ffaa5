use crate::retry::{IsRetryable, with_retry};

use std::sync::atomic::{AtomicU32, Ordering};

use jp_config::RetryConfig;

#[derive(Debug)]
struct FakeError {
    retryable: bool,
}

impl std::fmt::Display for FakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fake (retryable: {})", self.retryable)
    }
}

impl IsRetryable for FakeError {
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}

fn fast_config(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 10,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

#[tokio::test]
async fn test_retries_until_success() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result = with_retry(&fast_config(3), "op", move || async move {
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(FakeError { retryable: true })
        } else {
            Ok(42)
        }
    })
    .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_gives_up_after_max_attempts() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result: Result<(), _> = with_retry(&fast_config(2), "op", move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(FakeError { retryable: true })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_non_retryable_fails_immediately() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result: Result<(), _> = with_retry(&fast_config(5), "op", move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(FakeError { retryable: false })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_disabled_config_makes_one_attempt() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result: Result<(), _> = with_retry(&RetryConfig::disabled(), "op", move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(FakeError { retryable: true })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
