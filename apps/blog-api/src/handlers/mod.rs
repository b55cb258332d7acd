//! HTTP handlers and route configuration.

mod health;
mod posts;

use std::sync::Arc;

use actix_web::web;

use blog_core::ports::TokenService;

use crate::middleware::auth::Authenticate;
use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(tokens: Arc<dyn TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(
                web::scope("/api")
                    // Public routes
                    .route("/health", web::get().to(health::health_check))
                    // Post resource - every route requires a bearer token
                    .service(
                        web::scope("/posts")
                            .wrap(Authenticate::new(tokens))
                            .route("", web::get().to(posts::list))
                            .route("", web::post().to(posts::create))
                            .route("/{id}", web::get().to(posts::show))
                            .route("/{id}", web::put().to(posts::update))
                            .route("/{id}", web::delete().to(posts::destroy)),
                    ),
            );
    }
}
