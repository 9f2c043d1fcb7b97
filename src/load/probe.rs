use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

use super::outcome::AttemptOutcome;

/// Issues one GET request and reports what happened. Never fails the run.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn get(&self, url: &str) -> AttemptOutcome;
}

/// Probe backed by a single shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Builds the HTTP client used for every attempt of the run.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClient { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn get(&self, url: &str) -> AttemptOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("GET {} failed: {}", url, err);
                return AttemptOutcome::Failed;
            }
        };

        let status = response.status().as_u16();
        // Drain the body so the connection goes back to the pool.
        if let Err(err) = response.bytes().await {
            debug!("GET {} body read failed after status {}: {}", url, status, err);
        }
        AttemptOutcome::Status(status)
    }
}
