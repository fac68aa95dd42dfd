// ABOUTME: Runtime configuration for the generation pipeline
// ABOUTME: Retry, backoff, timeout, and sampling knobs with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! Generation configuration
//!
//! All knobs carry production defaults and can be overridden through
//! `NUTRIPLAN_*` environment variables. Tests construct configs directly
//! (usually with zero backoff) instead of going through the environment.

use std::env;
use std::time::Duration;

/// Configuration for the retry loop and the completion client
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Maximum number of generation attempts
    pub max_attempts: u32,
    /// Initial backoff delay before the second attempt, in milliseconds
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in milliseconds
    pub max_backoff_ms: u64,
    /// Per-attempt completion request timeout in seconds
    pub request_timeout_secs: u64,
    /// Sampling temperature passed to the generator
    pub temperature: f32,
    /// Completion token budget passed to the generator
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 1_000,
            max_backoff_ms: 5_000,
            request_timeout_secs: 45,
            temperature: 0.7,
            max_tokens: 8_192,
        }
    }
}

impl GenerationConfig {
    /// Create a configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_attempts: env_parse("NUTRIPLAN_MAX_ATTEMPTS", defaults.max_attempts),
            initial_backoff_ms: env_parse("NUTRIPLAN_INITIAL_BACKOFF_MS", defaults.initial_backoff_ms),
            max_backoff_ms: env_parse("NUTRIPLAN_MAX_BACKOFF_MS", defaults.max_backoff_ms),
            request_timeout_secs: env_parse(
                "NUTRIPLAN_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            temperature: env_parse("NUTRIPLAN_TEMPERATURE", defaults.temperature),
            max_tokens: env_parse("NUTRIPLAN_MAX_TOKENS", defaults.max_tokens),
        }
    }

    /// Set the maximum number of attempts
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the backoff window in milliseconds
    #[must_use]
    pub const fn with_backoff_ms(mut self, initial: u64, max: u64) -> Self {
        self.initial_backoff_ms = initial;
        self.max_backoff_ms = max;
        self
    }

    /// Set the per-attempt request timeout
    #[must_use]
    pub const fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Backoff delay to apply before the given attempt (1-based)
    ///
    /// The first attempt starts immediately; later attempts double the
    /// initial delay and clamp at the ceiling.
    #[must_use]
    pub fn backoff_before_attempt(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let doubled = self
            .initial_backoff_ms
            .saturating_mul(1_u64 << (attempt - 2).min(16));
        Duration::from_millis(doubled.min(self.max_backoff_ms))
    }

    /// Per-attempt request timeout as a [`Duration`]
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_parse<T: std::str::FromStr>(var: &str, default: T) -> T {
    env::var(var)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
