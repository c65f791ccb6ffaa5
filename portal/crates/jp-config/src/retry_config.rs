use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

pub const MAX_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=10;
pub const INITIAL_DELAY_MS_RANGE: RangeInclusive<u64> = 10..=10_000;
pub const MAX_DELAY_SECS_RANGE: RangeInclusive<u64> = 1..=60;
pub const BACKOFF_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// Backoff for idempotent reads that hit a transport failure.
///
/// Only `GET` requests are retried; writes and HTTP error statuses
/// surface on the first failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one (1 disables retry)
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_secs: u64,
    pub backoff_multiplier: f64,
    /// Scale each delay by a random factor in 0.5..1.5
    pub jitter: bool,
}

impl Default for RetryConfig {
    /// Three attempts: 100ms, then 200ms (jittered), capped at 5s
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 100,
            max_delay_secs: 5,
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Single attempt, no backoff
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range("max_attempts", self.max_attempts, &MAX_ATTEMPTS_RANGE)?;
        check_range(
            "initial_delay_ms",
            self.initial_delay_ms,
            &INITIAL_DELAY_MS_RANGE,
        )?;
        check_range("max_delay_secs", self.max_delay_secs, &MAX_DELAY_SECS_RANGE)?;
        check_range(
            "backoff_multiplier",
            self.backoff_multiplier,
            &BACKOFF_MULTIPLIER_RANGE,
        )?;

        if self.initial_delay() > self.max_delay() {
            return Err(ConfigError::retry(format!(
                "retry.initial_delay_ms ({}) exceeds retry.max_delay_secs ({})",
                self.initial_delay_ms, self.max_delay_secs
            )));
        }

        Ok(())
    }
}

#[track_caller]
fn check_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> ConfigErrorResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::retry(format!(
            "retry.{field} must be {}-{}, got {value}",
            range.start(),
            range.end()
        )))
    }
}
