//! Video upload handler.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use synk_models::{Job, JobId};
use synk_queue::ProcessUploadJob;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Upload response.
#[derive(Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub job_id: JobId,
}

/// Accept a multipart upload (`file`, optional `email`), persist the
/// file, create the job record, and schedule the pipeline run.
///
/// The request returns as soon as the job is created and enqueued; the
/// background run is never awaited here.
pub async fn upload_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut email: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let original = field
                    .file_name()
                    .unwrap_or("upload.bin")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                file = Some((original, bytes));
            }
            Some("email") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                if !value.is_empty() {
                    email = Some(value);
                }
            }
            _ => {}
        }
    }

    let (original, bytes) = file.ok_or_else(|| ApiError::bad_request("missing file field"))?;

    // The fresh job ID prefixes the stored name to avoid collisions.
    let job_id = JobId::new();
    let filename = format!("{}_{}", job_id, original);
    let input_path = state.config.upload_dir.join(&filename);

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| ApiError::storage(e.to_string()))?;
    tokio::fs::write(&input_path, &bytes)
        .await
        .map_err(|e| ApiError::storage(e.to_string()))?;

    let job = Job::new(job_id.clone(), email, filename, bytes.len() as u64);
    state.jobs.create(&job).await?;

    state
        .queue
        .enqueue(ProcessUploadJob::new(job_id.clone(), input_path))?;

    info!("Accepted upload for job {} ({} bytes)", job_id, bytes.len());
    Ok(Json(UploadResponse { ok: true, job_id }))
}
