//! Post CRUD and filter handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostFilter};
use quill_core::error::RepoError;
use quill_shared::MessageResponse;
use quill_shared::dto::{FilterParams, PostPayload};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/post/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(req.title, req.content, req.category, req.tags)?;
    let saved = state.posts.save(post).await?;

    tracing::debug!(id = saved.id, "Post created");
    Ok(HttpResponse::Created().json(saved))
}

/// PUT /api/post/{id}
///
/// Requires the full payload and validates it exactly like POST. The
/// read-then-save below is not transactional: a concurrent delete between the
/// two steps can lose this update (known gap).
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    post.apply(req.title, req.content, req.category, req.tags)?;
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/post/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully"))),
        Err(RepoError::NotFound) => Err(AppError::NotFound),
        Err(other) => Err(other.into()),
    }
}

/// GET /api/filter?term=&value=
pub async fn filter_posts(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();

    let (Some(term), Some(value)) = (params.term, params.value) else {
        return Err(AppError::BadRequest(
            "Please provide both search term and value".to_string(),
        ));
    };

    let filter = PostFilter::parse(&term, &value)?;
    let posts = state.posts.find_matching(&filter).await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use quill_infra::InMemoryPostRepository;
    use quill_shared::ErrorResponse;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState {
                        posts: Arc::new(InMemoryPostRepository::new()),
                    }))
                    .app_data(crate::json_config())
                    .app_data(crate::path_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn payload(title: &str, category: &str, tags: &[&str]) -> Value {
        json!({
            "title": title,
            "content": "Some content",
            "category": category,
            "tags": tags,
        })
    }

    #[actix_web::test]
    async fn create_returns_201_with_lowercased_category_and_tags() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("Hello", "Tech", &["AI", "ML"]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["category"], "tech");
        assert_eq!(body["tags"], json!(["ai", "ml"]));
        assert_eq!(body["id"], 1);
    }

    #[actix_web::test]
    async fn create_with_missing_field_is_400_and_persists_nothing() {
        let app = test_app!();

        // No tags field at all
        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({"title": "t", "content": "c", "category": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.error.is_empty());

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn create_with_empty_field_is_400() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("", "tech", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Title is required");
    }

    #[actix_web::test]
    async fn fetching_unknown_id_is_404() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/post/99999").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Post not found");
    }

    #[actix_web::test]
    async fn non_numeric_id_gets_a_json_error_body() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/post/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Post not found");
    }

    #[actix_web::test]
    async fn create_then_fetch_round_trips() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("Round trip", "tech", &["rust"]))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let uri = format!("/api/post/{}", created["id"]);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created, fetched);
    }

    #[actix_web::test]
    async fn update_lowercases_category_and_refreshes_updated_at() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("Original", "news", &[]))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/post/{}", created["id"]))
            .set_json(payload("Original", "Sports", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["category"], "sports");
        assert_eq!(updated["createdAt"], created["createdAt"]);
        assert_ne!(updated["updatedAt"], created["updatedAt"]);
    }

    #[actix_web::test]
    async fn update_with_empty_category_is_400() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("Original", "news", &[]))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/post/{}", created["id"]))
            .set_json(payload("Original", "", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Category is required");
    }

    #[actix_web::test]
    async fn update_of_unknown_id_is_404() {
        let app = test_app!();

        let req = test::TestRequest::put()
            .uri("/api/post/42")
            .set_json(payload("t", "c", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn delete_then_fetch_is_404() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("Doomed", "misc", &[]))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/post/{}", created["id"]);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post deleted successfully");

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn delete_of_unknown_id_is_404() {
        let app = test_app!();

        let req = test::TestRequest::delete().uri("/api/post/7").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Post not found");
    }

    #[actix_web::test]
    async fn filter_requires_both_term_and_value() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/filter?term=category")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Please provide both search term and value");
    }

    #[actix_web::test]
    async fn filter_rejects_unknown_term() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/filter?term=bogus&value=x")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid search term");
    }

    #[actix_web::test]
    async fn filter_rejects_malformed_id_range() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/filter?term=ids&value=abc,5")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid id range");
    }

    #[actix_web::test]
    async fn filter_by_id_range_is_inclusive() {
        let app = test_app!();

        for i in 0..3 {
            let req = test::TestRequest::post()
                .uri("/api/post")
                .set_json(payload(&format!("Post {i}"), "tech", &[]))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
        }

        let req = test::TestRequest::get()
            .uri("/api/filter?term=ids&value=1,2")
            .to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| {
            let id = p["id"].as_i64().unwrap();
            (1..=2).contains(&id)
        }));
    }

    #[actix_web::test]
    async fn filter_by_title_matches_substring_case_insensitively() {
        let app = test_app!();

        for title in ["Food for thought", "Completely unrelated", "FOOtball season"] {
            let req = test::TestRequest::post()
                .uri("/api/post")
                .set_json(payload(title, "misc", &[]))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
        }

        let req = test::TestRequest::get()
            .uri("/api/filter?term=title&value=foo")
            .to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 2);
    }

    #[actix_web::test]
    async fn filter_by_tag_matches_containment() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload("Tagged", "tech", &["Rust", "web"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::get()
            .uri("/api/filter?term=tags&value=RUST")
            .to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["title"], "Tagged");
    }
}
