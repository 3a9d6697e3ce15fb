use async_trait::async_trait;
use contracts::system::auth::{LoginData, LoginRequest, RawProfile};
use gloo_net::http::Request;

use super::error::AuthError;
use crate::shared::api_utils::{
    api_base, authorized, network_error, read_envelope, with_common_headers,
};

/// Backend calls made by the auth service
#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`; returns the session token
    async fn exchange_credentials(&self, request: &LoginRequest) -> Result<String, AuthError>;

    /// `GET /auth/me`
    async fn fetch_profile(&self, token: &str) -> Result<RawProfile, AuthError>;

    /// `POST /auth/logout`
    async fn invalidate(&self, token: &str) -> Result<(), AuthError>;
}

/// [`AuthApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Uses [`api_base`] resolved at construction time
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn exchange_credentials(&self, request: &LoginRequest) -> Result<String, AuthError> {
        let response = with_common_headers(Request::post(&self.url("/auth/login")))
            .json(request)
            .map_err(|e| AuthError::Unexpected(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        let envelope = read_envelope::<LoginData>(response).await?;
        envelope
            .data
            .and_then(|d| d.token)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::Unexpected("login response has no token".to_string()))
    }

    async fn fetch_profile(&self, token: &str) -> Result<RawProfile, AuthError> {
        let response = authorized(Request::get(&self.url("/auth/me")), token)
            .send()
            .await
            .map_err(network_error)?;

        read_envelope::<RawProfile>(response)
            .await?
            .data
            .ok_or_else(|| AuthError::Unexpected("profile response has no data".to_string()))
    }

    async fn invalidate(&self, token: &str) -> Result<(), AuthError> {
        let response = authorized(Request::post(&self.url("/auth/logout")), token)
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(AuthError::Server {
                status: response.status(),
                message: None,
            });
        }
        Ok(())
    }
}
