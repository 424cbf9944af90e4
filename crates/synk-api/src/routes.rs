//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::health::{root, store_check};
use crate::handlers::jobs::get_job;
use crate::handlers::renders::demo_render;
use crate::handlers::uploads::upload_video;
use crate::handlers::waitlist::waitlist_signup;
use crate::middleware::cors_layer;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/waitlist", post(waitlist_signup))
        .route("/upload", post(upload_video))
        .route("/jobs/:job_id", get(get_job))
        .route("/demo/render/:name", get(demo_render));

    Router::new()
        .route("/", get(root))
        .route("/test", get(store_check))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
