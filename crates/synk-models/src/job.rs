//! Upload job record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{JobStatus, PipelineStep};

/// Unique identifier for an upload job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked upload-and-pipeline-run record.
///
/// Created by the API layer in `queued` state; mutated only by the
/// pipeline runner after that. Exactly one of `render_url`/`error` is
/// set once the status is terminal, and neither before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job ID (also the document key)
    pub id: JobId,

    /// Optional contact email supplied at upload time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Stored filename: `<job_id>_<original filename>`
    pub filename: String,

    /// Byte length of the stored upload
    pub size_bytes: u64,

    /// Current job status
    pub status: JobStatus,

    /// Progress percentage (0-100), non-decreasing while processing
    pub progress: u8,

    /// Step currently executing or last attempted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<PipelineStep>,

    /// Output locator, set only on completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_url: Option<String>,

    /// Failure cause, set only on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// When the job was created
    pub created_at: DateTime<Utc>,

    /// When the record was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new job in `queued` state, primed on the first step.
    pub fn new(
        id: JobId,
        email: Option<String>,
        filename: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            filename: filename.into(),
            size_bytes,
            status: JobStatus::Queued,
            progress: 0,
            current_step: Some(PipelineStep::first()),
            render_url: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the job is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
