use thiserror::Error;

pub const MSG_NETWORK: &str = "Tidak dapat terhubung ke server. Periksa koneksi Anda.";
pub const MSG_SERVER: &str = "Terjadi kesalahan pada server.";
pub const MSG_UNEXPECTED: &str = "Terjadi kesalahan. Silakan coba lagi.";
pub const MSG_MISSING_CREDENTIALS: &str = "Username dan password wajib diisi.";

/// Failures of auth and data requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,

    /// No response was received
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but reported failure
    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Malformed response or other client-side fault
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// A newer login or a logout started while this request was in flight
    #[error("request superseded by a newer session change")]
    Superseded,
}

impl AuthError {
    /// Text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::MissingCredentials => MSG_MISSING_CREDENTIALS.to_string(),
            AuthError::Network(_) => MSG_NETWORK.to_string(),
            AuthError::Server { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(MSG_SERVER)
                .to_string(),
            AuthError::Unexpected(_) | AuthError::Superseded => MSG_UNEXPECTED.to_string(),
        }
    }
}
