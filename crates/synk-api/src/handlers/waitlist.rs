//! Waitlist signup handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use synk_models::WaitlistEntry;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Signup response.
#[derive(Serialize)]
pub struct WaitlistResponse {
    pub ok: bool,
    pub id: String,
}

/// Validate and persist a waitlist signup.
///
/// A malformed email is rejected before anything reaches the store.
pub async fn waitlist_signup(
    State(state): State<AppState>,
    Json(entry): Json<WaitlistEntry>,
) -> ApiResult<Json<WaitlistResponse>> {
    entry
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let id = state.waitlist.create(&entry).await?;
    Ok(Json(WaitlistResponse { ok: true, id }))
}
