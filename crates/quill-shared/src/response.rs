//! Standardized API response bodies.
//!
//! Success bodies are the post entity itself (or an array of them); these two
//! wrappers cover everything else the API returns.

use serde::{Deserialize, Serialize};

/// Error body - every failure response is `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn unknown() -> Self {
        Self::new("An unknown error occurred")
    }
}

/// Confirmation body for operations with nothing to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
