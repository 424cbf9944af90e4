//! Application state.

use std::sync::Arc;

use synk_queue::JobQueue;
use synk_store::{DocumentStore, JobRepository, WaitlistRepository};

use crate::config::ApiConfig;

/// Shared application state.
///
/// The store handle is created once here and injected into the
/// repositories; the worker pool gets its repository handle from the
/// same state at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<DocumentStore>,
    pub jobs: JobRepository,
    pub waitlist: WaitlistRepository,
    pub queue: JobQueue,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig, queue: JobQueue) -> Self {
        let store = Arc::new(DocumentStore::new());
        let jobs = JobRepository::new(Arc::clone(&store));
        let waitlist = WaitlistRepository::new(Arc::clone(&store));

        Self {
            config,
            store,
            jobs,
            waitlist,
            queue,
        }
    }
}
