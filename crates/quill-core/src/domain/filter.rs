use crate::error::DomainError;

/// A typed query predicate over posts, one variant per supported filter term.
///
/// Constructed once at the HTTP boundary via [`PostFilter::parse`]; repository
/// implementations match on it exhaustively, so an unhandled term is a compile
/// error rather than a runtime fall-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    /// Exact match on `category` (value lowercased).
    Category(String),
    /// Containment: the tag collection includes the value (lowercased).
    Tag(String),
    /// Exact match on `created_at`; the value is handed to the store verbatim.
    CreatedAt(String),
    /// Case-insensitive substring match on `title`.
    TitleContains(String),
    /// Inclusive id range.
    IdRange { start: i32, end: i32 },
}

impl PostFilter {
    /// Translate a `term`/`value` query pair into a filter.
    ///
    /// `term` is matched case-insensitively. The `ids` term expects a
    /// `start,end` pair of integers.
    pub fn parse(term: &str, value: &str) -> Result<Self, DomainError> {
        match term.to_lowercase().as_str() {
            "category" => Ok(Self::Category(value.to_lowercase())),
            "tags" => Ok(Self::Tag(value.to_lowercase())),
            "date" => Ok(Self::CreatedAt(value.to_string())),
            "title" => Ok(Self::TitleContains(value.to_string())),
            "ids" => {
                let (start, end) = value
                    .split_once(',')
                    .and_then(|(s, e)| Some((s.trim().parse().ok()?, e.trim().parse().ok()?)))
                    .ok_or_else(|| DomainError::Validation("Invalid id range".to_string()))?;
                Ok(Self::IdRange { start, end })
            }
            _ => Err(DomainError::Validation("Invalid search term".to_string())),
        }
    }
}
