//! API utilities for frontend-backend communication
//!
//! Base URL resolution, the headers every backend call carries, and decoding
//! of the `{ success, data, paging? }` envelope.

use contracts::shared::envelope::{Envelope, ErrorBody};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::shared::config::config;
use crate::system::auth::error::AuthError;

/// Get the base URL for API requests
///
/// Uses the configured `api.base_url` when set; otherwise the page's own
/// host on the configured port.
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path such as `/auth/me`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Headers sent on every request
pub fn with_common_headers(builder: RequestBuilder) -> RequestBuilder {
    if config().api.skip_ngrok_warning {
        builder.header("ngrok-skip-browser-warning", "true")
    } else {
        builder
    }
}

/// Attach the raw session token (the backend does not use a `Bearer` prefix)
pub fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    with_common_headers(builder).header("Authorization", token)
}

/// Map a transport failure; no response was received
pub fn network_error(e: gloo_net::Error) -> AuthError {
    AuthError::Network(e.to_string())
}

/// Decode a response body into an envelope, classifying failures.
///
/// Non-2xx uses the body's `message` if it has one; a 2xx with
/// `success: false` is a server error too.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    body: &str,
) -> Result<Envelope<T>, AuthError> {
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        return Err(AuthError::Server { status, message });
    }

    let envelope: Envelope<T> = serde_json::from_str(body)
        .map_err(|e| AuthError::Unexpected(format!("Failed to parse response: {}", e)))?;

    if !envelope.success {
        return Err(AuthError::Server {
            status,
            message: envelope.message,
        });
    }

    Ok(envelope)
}

/// Read and decode a response
pub async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<Envelope<T>, AuthError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::Unexpected(format!("Failed to read response: {}", e)))?;
    decode_envelope(status, ok, &body)
}

/// GET an authenticated endpoint and return its envelope
pub async fn fetch_envelope<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<Envelope<T>, AuthError> {
    let response = authorized(Request::get(&api_url(path)), token)
        .send()
        .await
        .map_err(network_error)?;
    read_envelope(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let env: Envelope<Vec<String>> =
            decode_envelope(200, true, r#"{"success":true,"data":["a"]}"#).unwrap();
        assert_eq!(env.data, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_decode_non_2xx_with_message() {
        let err = decode_envelope::<serde_json::Value>(
            401,
            false,
            r#"{"success":false,"message":"Token tidak valid"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AuthError::Server {
                status: 401,
                message: Some("Token tidak valid".into())
            }
        );
    }

    #[test]
    fn test_decode_non_2xx_html_body() {
        let err = decode_envelope::<serde_json::Value>(502, false, "<html>Bad Gateway</html>")
            .unwrap_err();
        assert_eq!(
            err,
            AuthError::Server {
                status: 502,
                message: None
            }
        );
    }

    #[test]
    fn test_decode_success_flag_false() {
        let err = decode_envelope::<serde_json::Value>(
            200,
            true,
            r#"{"success":false,"message":"User tidak aktif"}"#,
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "User tidak aktif");
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_envelope::<serde_json::Value>(200, true, "not json").unwrap_err();
        assert!(matches!(err, AuthError::Unexpected(_)));
    }
}
