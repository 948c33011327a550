//! HTTP adapters for the two hosted services the site talks to.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so lookup and relay
//! failures degrade to a short UI message without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RelayPayload, UserInfo};

/// Failure talking to a hosted service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{service} request failed: {status}")]
    Status { service: &'static str, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Destination for contact-form submissions.
#[allow(async_fn_in_trait)]
pub trait ContactRelay {
    /// Deliver one submission. `Ok` means the relay answered 2xx.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure or a non-2xx status.
    async fn forward(&self, payload: &RelayPayload) -> Result<(), ApiError>;
}

/// Source of profile data for an OAuth access token.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Resolve the profile behind `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure, a non-2xx status, or an
    /// undecodable body.
    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Form relay reached over HTTPS with a JSON body.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ContactRelay for HttpRelay {
    async fn forward(&self, payload: &RelayPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { service: "relay", status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.endpoint, payload);
            Err(ApiError::Unavailable)
        }
    }
}

/// OAuth userinfo endpoint queried with a bearer token.
#[derive(Clone, Debug)]
pub struct HttpIdentity {
    endpoint: String,
}

impl HttpIdentity {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl IdentityProvider for HttpIdentity {
    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .header("Authorization", &bearer_header(access_token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { service: "userinfo", status: resp.status() });
            }
            resp.json::<UserInfo>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.endpoint, access_token);
            Err(ApiError::Unavailable)
        }
    }
}
