//! HTTP client for task API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the task collection resource, handling URL assembly, response status
//! checks, and error conversion.

use super::error::ApiError;
use reqwest::{Method, Response};

/// Makes requests to the task API and surfaces non-success responses as
/// typed errors.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a request against the given resource path and return the
    /// response, or an error for transport failures and non-2xx statuses.
    ///
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let request_url = format!("{}/{}", self.base_url, path);

        let mut request = self.http_client.request(method.clone(), &request_url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!(
                "{} {} failed with status {}: {}",
                method,
                request_url,
                status,
                message
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = Client::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
