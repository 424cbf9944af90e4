//! Worker error types.
//!
//! A pipeline failure is never surfaced to a caller; it is recorded on
//! the job record and the job transitions to `failed`.

use thiserror::Error;

use synk_store::StoreError;

pub type WorkerResult<T> = Result<T, WorkerError>;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Input file unavailable: {0}")]
    InputUnavailable(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
