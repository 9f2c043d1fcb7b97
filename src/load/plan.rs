use std::time::Duration;

use crate::args::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, LoadArgs};
use crate::error::{AppError, AppResult, ValidationError};
use crate::prompt::InputSource;

use super::endpoints::EndpointList;

/// Everything a load run needs, resolved from flags, config and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    pub base_url: String,
    pub requests: u64,
    pub endpoints: EndpointList,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LoadPlan {
    /// Plan over the default endpoints with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>, requests: u64) -> Self {
        Self {
            base_url: base_url.into(),
            requests,
            endpoints: EndpointList::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: EndpointList) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Resolves a plan from parsed arguments (config already applied).
    ///
    /// Values still missing are taken from `input`.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or empty URL, a missing or invalid
    /// request count, or an empty endpoint list.
    pub fn from_args<I>(args: LoadArgs, input: &mut I) -> AppResult<Self>
    where
        I: InputSource + ?Sized,
    {
        let LoadArgs {
            url,
            requests,
            endpoints,
            request_timeout,
            connect_timeout,
            ..
        } = args;

        let endpoints = if endpoints.is_empty() {
            EndpointList::default()
        } else {
            EndpointList::new(endpoints)?
        };

        let base_url = match url {
            Some(url) => url,
            None => input.base_url()?,
        };
        if base_url.trim().is_empty() {
            return Err(AppError::validation(ValidationError::MissingUrl));
        }

        let requests = match requests {
            Some(requests) => requests,
            None => input.request_count()?,
        };

        Ok(Self {
            base_url,
            requests: requests.get(),
            endpoints,
            request_timeout,
            connect_timeout,
        })
    }
}
