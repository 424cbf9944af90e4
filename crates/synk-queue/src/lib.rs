//! Bounded in-process job queue.
//!
//! This crate provides:
//! - [`ProcessUploadJob`]: the work item enqueued per upload
//! - [`JobQueue`] / [`JobReceiver`]: a bounded mpsc channel pair; the
//!   API holds the sender, the worker pool drains the receiver

pub mod error;
pub mod job;
pub mod queue;

pub use error::{QueueError, QueueResult};
pub use job::ProcessUploadJob;
pub use queue::{JobQueue, JobReceiver, QueueConfig};
