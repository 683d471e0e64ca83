//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a post.
///
/// Every field is required; PUT validates exactly like POST. `tags` may be an
/// empty array but must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Query parameters for the filter endpoint.
///
/// Both fields are optional at the type level so the handler can report a
/// missing one with a specific message instead of a framework rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterParams {
    pub term: Option<String>,
    pub value: Option<String>,
}
