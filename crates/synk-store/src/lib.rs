//! In-process document store for the synk backend.
//!
//! This crate provides:
//! - [`DocumentStore`]: a collection/document map with atomic
//!   create, point lookup, and partial field update
//! - Typed repositories ([`JobRepository`], [`WaitlistRepository`])
//!   that marshal models to and from stored documents

pub mod error;
pub mod jobs;
pub mod store;
pub mod waitlist;

pub use error::{StoreError, StoreResult};
pub use jobs::{JobRepository, JOBS_COLLECTION};
pub use store::DocumentStore;
pub use waitlist::{WaitlistRepository, WAITLIST_COLLECTION};
