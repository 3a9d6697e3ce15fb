use serde::{Deserialize, Serialize};

/// Paging block attached to list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub total_item: Option<u64>,
    #[serde(default)]
    pub total_page: Option<u64>,
}

/// Uniform backend response wrapper: `{ success, data, paging?, message? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub paging: Option<Paging>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body variant; only `message` matters to the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
