use super::{
    handlers::{health, pagination, pictures},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Pictures
        .route("/api/pictures", get(pictures::list_pictures))
        .route("/api/pictures/{id}", get(pictures::get_picture))
        .route("/api/gallery", get(pictures::browse_gallery))
        // Pagination control
        .route("/api/pagination", get(pagination::get_navigation))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
