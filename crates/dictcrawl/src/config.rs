// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Crawl configuration and resolution.
//!
//! Values come from, in increasing precedence: built-in defaults,
//! `DICTCRAWL_*` environment variables, then explicit command-line flags.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::acquisition::retry::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://dictionary.cambridge.org/dictionary/english/";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// Settings shared by the fetcher and the batch runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Prefix the looked-up word is appended to.
    pub base_url: String,
    pub user_agent: String,
    /// Total fetch attempts before giving up on a word.
    pub max_attempts: u32,
    /// Base of the exponential backoff between attempts.
    pub backoff_unit_ms: u64,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Pause between successive words in a batch.
    pub delay_ms: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_attempts: 3,
            backoff_unit_ms: 1000,
            timeout_ms: 30_000,
            delay_ms: 2000,
        }
    }
}

impl CrawlConfig {
    /// Defaults overlaid with any `DICTCRAWL_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay values from a variable lookup. Unparsable numbers are
    /// ignored and the previous value kept.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DICTCRAWL_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = lookup("DICTCRAWL_USER_AGENT") {
            self.user_agent = v;
        }
        env_number(&lookup, "DICTCRAWL_MAX_ATTEMPTS", &mut self.max_attempts);
        env_number(&lookup, "DICTCRAWL_BACKOFF_MS", &mut self.backoff_unit_ms);
        env_number(&lookup, "DICTCRAWL_TIMEOUT_MS", &mut self.timeout_ms);
        env_number(&lookup, "DICTCRAWL_DELAY_MS", &mut self.delay_ms);
    }

    /// Retry policy for the fetcher.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            backoff_unit: Duration::from_millis(self.backoff_unit_ms),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Dictionary page URL for a word.
    pub fn word_url(&self, word: &str) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&format!("{}{}", self.base_url, word))
    }
}

fn env_number<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(v) => *slot = v,
            Err(_) => tracing::warn!("ignoring {key}={raw:?}: not a number"),
        }
    }
}
