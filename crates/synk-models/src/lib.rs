//! Shared data models for the synk backend.
//!
//! This crate provides Serde-serializable types for:
//! - Upload jobs and their status lifecycle
//! - The fixed pipeline step table
//! - Waitlist signups

pub mod job;
pub mod job_status;
pub mod pipeline;
pub mod waitlist;

// Re-export common types
pub use job::{Job, JobId};
pub use job_status::JobStatus;
pub use pipeline::PipelineStep;
pub use waitlist::WaitlistEntry;
