//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use quill_core::domain::{Post, PostFilter};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Translate a filter into a SQL predicate.
///
/// The match is exhaustive over [`PostFilter`], so adding a term without a
/// translation is a compile error.
fn predicate(filter: &PostFilter) -> SimpleExpr {
    match filter {
        PostFilter::Category(category) => post::Column::Category.eq(category.clone()),
        PostFilter::Tag(tag) => Expr::cust_with_values(
            "tags @> CAST(? AS jsonb)",
            [serde_json::json!([tag]).to_string()],
        ),
        // The raw value is bound and cast by Postgres; an unparseable value
        // surfaces as a query error.
        PostFilter::CreatedAt(value) => {
            Expr::cust_with_values("created_at = CAST(? AS timestamptz)", [value.clone()])
        }
        PostFilter::TitleContains(needle) => {
            Expr::col(post::Column::Title).ilike(format!("%{needle}%"))
        }
        PostFilter::IdRange { start, end } => post::Column::Id.between(*start, *end),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_matching(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(?filter, "Filtering posts");

        let result = PostEntity::find()
            .filter(predicate(filter))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
