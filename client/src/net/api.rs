//! REST client for the remote Users collection.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! the page (stale roster, error alert) without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewUser, User};
use crate::util::config::ApiConfig;

/// Failure of a single request against the Users API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body did not match the expected schema.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// No HTTP stack in this environment (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided, user-presentable detail, if any.
    ///
    /// Empty strings count as absent.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail: Some(detail), .. } if !detail.is_empty() => Some(detail.as_str()),
            _ => None,
        }
    }
}

/// The two operations the registration page needs from the Users service.
#[allow(async_fn_in_trait)]
pub trait UsersApi {
    /// `GET /users`: the full roster in server order.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// `POST /users`: register one user. The response body is ignored.
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError>;
}

/// [`UsersApi`] backed by browser `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpUsersApi {
    config: ApiConfig,
}

impl HttpUsersApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.users_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status(), detail: None });
            }
            resp.json::<Vec<User>>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.users_endpoint())
                .json(user)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(ApiError::Unavailable)
        }
    }
}

/// Build the error for a non-2xx response, pulling `detail` out of the body
/// when it is a JSON object carrying a string under that key.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<super::types::ErrorBody>(body).ok().and_then(|b| b.detail);
    ApiError::Status { status, detail }
}
