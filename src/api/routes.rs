use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Attribute definition catalog
        .route("/attributes", get(handlers::get_attributes))
        .route("/attributes", post(handlers::create_attribute))
        // Wardrobe items
        .route("/items", get(handlers::get_items))
        .route("/items", post(handlers::create_item))
        // Outfit recommendation
        .route("/recommendations", post(handlers::recommend))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
