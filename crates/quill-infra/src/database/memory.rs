//! In-memory post repository - used as fallback when the database is not
//! configured, and as the backing store for handler tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostFilter};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

struct Inner {
    posts: BTreeMap<i32, Post>,
    next_id: i32,
}

/// In-memory post store keyed by id, with an async RwLock.
///
/// Iteration order follows the BTreeMap, so listings are stable for the
/// lifetime of the process. Data is lost on restart.
pub struct InMemoryPostRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn matches(post: &Post, filter: &PostFilter) -> bool {
        match filter {
            PostFilter::Category(category) => post.category == *category,
            PostFilter::Tag(tag) => post.tags.iter().any(|t| t == tag),
            PostFilter::CreatedAt(value) => post.created_at.to_rfc3339() == *value,
            PostFilter::TitleContains(needle) => {
                post.title.to_lowercase().contains(&needle.to_lowercase())
            }
            PostFilter::IdRange { start, end } => (*start..=*end).contains(&post.id),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.get(&id).cloned())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut inner = self.inner.write().await;

        if entity.id == 0 {
            entity.id = inner.next_id;
            inner.next_id += 1;
        }
        inner.posts.insert(entity.id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut inner = self.inner.write().await;
        inner.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.values().cloned().collect())
    }

    async fn find_matching(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .values()
            .filter(|p| Self::matches(p, filter))
            .cloned()
            .collect())
    }
}
