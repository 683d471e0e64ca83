use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a blog post or article.
///
/// Timestamps serialize as `createdAt`/`updatedAt`, the public JSON shape of
/// the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Assigned by the store on first save; 0 until then.
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post, validating required fields and normalizing
    /// `category` and every tag to lowercase.
    pub fn new(
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
    ) -> Result<Self, DomainError> {
        validate_required(&title, &content, &category)?;

        let now = Utc::now();
        Ok(Self {
            id: 0,
            title,
            content,
            category: category.to_lowercase(),
            tags: lowercase_all(tags),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace all mutable fields with the same validation and normalization
    /// as [`Post::new`]. Refreshes `updated_at`; `created_at` is untouched.
    pub fn apply(
        &mut self,
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
    ) -> Result<(), DomainError> {
        validate_required(&title, &content, &category)?;

        self.title = title;
        self.content = content;
        self.category = category.to_lowercase();
        self.tags = lowercase_all(tags);
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_required(title: &str, content: &str, category: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::Validation("Title is required".to_string()));
    }
    if content.is_empty() {
        return Err(DomainError::Validation("Content is required".to_string()));
    }
    if category.is_empty() {
        return Err(DomainError::Validation("Category is required".to_string()));
    }
    Ok(())
}

fn lowercase_all(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.to_lowercase()).collect()
}
