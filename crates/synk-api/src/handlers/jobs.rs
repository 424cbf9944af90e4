//! Job status polling handler.

use axum::extract::{Path, State};
use axum::Json;

use synk_models::{Job, JobId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Look up a job by identifier and return the full record.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<Job>> {
    let job = state
        .jobs
        .get(&JobId::from_string(job_id))
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    Ok(Json(job))
}
