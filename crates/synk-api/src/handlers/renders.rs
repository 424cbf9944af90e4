//! Demo render placeholder handler.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

/// Static placeholder served for every render lookup. A real system
/// would stream the rendered file here.
const DEMO_RENDER_URL: &str =
    "https://cdn.coverr.co/videos/coverr-northern-lights-6960/1080p.mp4";

/// Render locator response.
#[derive(Serialize)]
pub struct DemoRenderResponse {
    pub url: String,
}

/// Resolve a render name to the placeholder locator.
pub async fn demo_render(Path(_name): Path<String>) -> Json<DemoRenderResponse> {
    Json(DemoRenderResponse {
        url: DEMO_RENDER_URL.to_string(),
    })
}
