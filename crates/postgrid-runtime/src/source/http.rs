use super::PostSource;
use crate::config::FetchConfig;
use crate::{Error, Result};
use postgrid_types::{Post, parse_posts_slice};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub timeout: Duration,
    pub max_attempts: u32,
    /// Delay before the second attempt; grows linearly afterwards
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for RetryPolicy {
    fn from(config: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            max_attempts: config.max_attempts.max(1),
            base_backoff: Duration::from_millis(config.backoff_ms),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        self.base_backoff.saturating_mul(attempt)
    }
}

/// Server errors, timeouts and throttling may clear up; other statuses will not
fn is_transient(status: reqwest::StatusCode) -> bool {
    status.is_server_error()
        || status == reqwest::StatusCode::REQUEST_TIMEOUT
        || status == reqwest::StatusCode::TOO_MANY_REQUESTS
}

/// Catalog served over HTTP(S).
///
/// Transport failures and transient statuses (5xx, 408, 429) are retried up
/// to `max_attempts`. Other statuses and a malformed body fail at once.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    retry: RetryPolicy,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            url: url.into(),
            retry,
        }
    }

    fn client(&self) -> Result<reqwest::blocking::Client> {
        Ok(reqwest::blocking::Client::builder()
            .timeout(self.retry.timeout)
            .build()?)
    }

    fn get_with_retry(&self) -> Result<Vec<u8>> {
        let client = self.client()?;
        let mut attempt = 0;
        loop {
            attempt += 1;
            let (failure, transient) = match client.get(&self.url).send() {
                Ok(resp) if resp.status().is_success() => {
                    return Ok(resp.bytes()?.to_vec());
                }
                Ok(resp) => (
                    Error::Status {
                        url: self.url.clone(),
                        status: resp.status().as_u16(),
                    },
                    is_transient(resp.status()),
                ),
                Err(err) => (Error::Http(err), true),
            };

            if !transient || attempt >= self.retry.max_attempts {
                return Err(failure);
            }
            tracing::warn!(
                url = %self.url,
                attempt,
                max_attempts = self.retry.max_attempts,
                error = %failure,
                "fetch failed, retrying"
            );
            std::thread::sleep(self.retry.backoff(attempt));
        }
    }
}

impl PostSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load(&self) -> Result<Vec<Post>> {
        let body = self.get_with_retry()?;
        Ok(parse_posts_slice(&body)?)
    }
}
