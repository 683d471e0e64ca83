//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .route("/posts", web::get().to(posts::list_posts))
            .route("/post", web::post().to(posts::create_post))
            .route("/post/{id}", web::get().to(posts::get_post))
            .route("/post/{id}", web::put().to(posts::update_post))
            .route("/post/{id}", web::delete().to(posts::delete_post))
            .route("/filter", web::get().to(posts::filter_posts)),
    );
}
