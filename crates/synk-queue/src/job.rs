//! Work item types for the queue.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use synk_models::JobId;

/// Work item scheduled when a video is uploaded: the job to drive plus
/// the stored input it was created from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessUploadJob {
    /// Job record to drive through the pipeline
    pub job_id: JobId,
    /// Path of the stored upload
    pub input_path: PathBuf,
    /// When the work item was created
    pub created_at: DateTime<Utc>,
}

impl ProcessUploadJob {
    /// Create a new work item.
    pub fn new(job_id: JobId, input_path: impl Into<PathBuf>) -> Self {
        Self {
            job_id,
            input_path: input_path.into(),
            created_at: Utc::now(),
        }
    }
}
