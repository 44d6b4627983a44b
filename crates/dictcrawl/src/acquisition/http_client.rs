// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Async HTTP client wrapping reqwest.
//!
//! Only transport-level failures (connect, timeout, broken body) are
//! retried. Any HTTP status, including 4xx and 5xx, is handed back to the
//! caller for page validation.

use crate::acquisition::retry::{retry, RetryOutcome, RetryPolicy};
use crate::config::CrawlConfig;
use crate::types::{DictError, DictResult};

/// Response from a dictionary page GET.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Final URL after redirects.
    pub final_url: String,
    pub status: u16,
    pub body: String,
    /// Attempts it took to get a response.
    pub attempts: u32,
}

/// HTTP client for dictionary pages.
#[derive(Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl DictionaryClient {
    /// Build a client identifying itself with the configured user agent.
    pub fn new(config: &CrawlConfig) -> DictResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DictError::Fetch {
                url: config.base_url.clone(),
                attempts: 0,
                message: format!("cannot build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            policy: config.retry_policy(),
        })
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// GET a page, retrying transport failures with exponential backoff.
    pub async fn fetch(&self, url: &str) -> DictResult<PageResponse> {
        let outcome = retry(&self.policy, |attempt| async move {
            tracing::debug!("GET {url} (attempt {})", attempt + 1);
            self.get_once(url).await
        })
        .await;

        match outcome {
            RetryOutcome::Success { value, attempts } => {
                let (status, final_url, body) = value;
                tracing::debug!("GET {url} -> {status} after {attempts} attempt(s)");
                Ok(PageResponse {
                    final_url,
                    status,
                    body,
                    attempts,
                })
            }
            RetryOutcome::Exhausted {
                attempts,
                last_error,
            } => Err(DictError::Fetch {
                url: url.to_string(),
                attempts,
                message: describe(&last_error),
            }),
        }
    }

    async fn get_once(&self, url: &str) -> Result<(u16, String, String), reqwest::Error> {
        let r = self.client.get(url).send().await?;
        let status = r.status().as_u16();
        let final_url = r.url().to_string();
        let body = r.text().await?;
        Ok((status, final_url, body))
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DictionaryClient::new(&CrawlConfig::default()).unwrap();
        assert_eq!(client.policy().max_attempts, 3);
    }

    #[tokio::test]
    async fn test_unreachable_host_exhausts_attempts() {
        let config = CrawlConfig {
            max_attempts: 2,
            backoff_unit_ms: 0,
            timeout_ms: 2000,
            ..CrawlConfig::default()
        };
        let client = DictionaryClient::new(&config).unwrap();
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = client
            .fetch(&format!("http://127.0.0.1:{port}/run"))
            .await
            .unwrap_err();
        match err {
            DictError::Fetch { attempts, .. } => assert_eq!(attempts, 2),
            other => panic!("expected fetch error, got {other}"),
        }
    }
}
