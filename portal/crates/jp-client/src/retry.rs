use crate::ClientError;

use std::time::Duration;

use jp_config::RetryConfig;
use log::{debug, info, warn};
use tokio::time::sleep;

/// Errors that know whether another attempt could succeed
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for ClientError {
    fn is_retryable(&self) -> bool {
        ClientError::is_retryable(self)
    }
}

/// Delay schedule for one retried call: exponential, capped, optionally jittered.
struct Backoff<'a> {
    config: &'a RetryConfig,
    next: Duration,
}

impl<'a> Backoff<'a> {
    fn new(config: &'a RetryConfig) -> Self {
        Self {
            config,
            next: config.initial_delay(),
        }
    }

    /// Delay before the next attempt; advances the schedule.
    fn step(&mut self) -> Duration {
        let base = self.next;
        let grown = base.as_secs_f64() * self.config.backoff_multiplier;
        self.next = Duration::from_secs_f64(grown.min(self.config.max_delay().as_secs_f64()));

        if self.config.jitter {
            // 0.5x to 1.5x
            base.mul_f64(0.5 + rand::random::<f64>())
        } else {
            base
        }
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// `config.max_attempts` is used up.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    label: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut backoff = Backoff::new(config);
    let mut attempt = 1;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{label} succeeded on attempt {attempt}");
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if !error.is_retryable() {
            return Err(error);
        }

        if attempt >= config.max_attempts {
            if attempt > 1 {
                warn!("{label} gave up after {attempt} attempts: {error}");
            }
            return Err(error);
        }

        let delay = backoff.step();
        debug!("{label} attempt {attempt} failed: {error}. Retrying in {delay:?}");
        sleep(delay).await;
        attempt += 1;
    }
}
