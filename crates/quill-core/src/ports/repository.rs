use async_trait::async_trait;

use crate::domain::{Post, PostFilter};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update). An entity whose ID is still the
    /// store-assigned default is inserted; anything else is updated.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] if no
    /// row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with domain-specific queries.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// All posts, in store-native order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// All posts matching a filter predicate.
    async fn find_matching(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;
}
