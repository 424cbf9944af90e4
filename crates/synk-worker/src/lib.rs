//! Background processing for the synk backend.
//!
//! This crate provides:
//! - The pipeline runner: drives one job through the fixed step
//!   sequence, persisting an update per step
//! - [`JobExecutor`]: a semaphore-bounded worker pool draining the
//!   upload queue

pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;

pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use executor::JobExecutor;
pub use pipeline::{execute, run_pipeline};
