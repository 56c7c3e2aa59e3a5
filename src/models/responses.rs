use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_STATUS: &str = "SEOSiri Intelligence Online";
pub const SERVICE_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " FINAL");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn online() -> Self {
        Self {
            status: SERVICE_STATUS.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
            timestamp: Utc::now(),
        }
    }
}
