// API request/response models (DTOs)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /update-product-metafield`. Both members are optional at
/// this level; presence is checked by the updater.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub product_id: Option<ProductIdInput>,
    #[serde(default)]
    pub year_range: Option<String>,
}

/// Product id as sent by callers: a string, or a bare integer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductIdInput {
    Text(String),
    Numeric(u64),
}

impl ProductIdInput {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Numeric(n) => n.to_string(),
        }
    }
}

/// Uniform JSON envelope for every response of the update endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Value>>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, years: Vec<u32>) -> Self {
        Self {
            success: true,
            message: message.into(),
            years: Some(years),
            details: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            years: None,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<Value>) -> Self {
        self.details = Some(details);
        self
    }
}
