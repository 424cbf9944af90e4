//! Worker pool draining the upload queue.

use std::sync::Arc;

use tokio::sync::{watch, Semaphore};
use tracing::info;

use synk_queue::JobReceiver;
use synk_store::JobRepository;

use crate::config::WorkerConfig;
use crate::pipeline;

/// Worker pool: consumes work items from the queue, bounded by
/// `max_concurrent_jobs`, spawning one pipeline run per item.
///
/// The pool stops when the queue closes or the shutdown handle fires;
/// in-flight runs are drained before `run` returns.
pub struct JobExecutor {
    config: WorkerConfig,
    jobs: JobRepository,
    job_semaphore: Arc<Semaphore>,
    shutdown: watch::Sender<bool>,
}

impl JobExecutor {
    /// Create a new executor.
    pub fn new(config: WorkerConfig, jobs: JobRepository) -> Self {
        let job_semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));
        let (shutdown, _) = watch::channel(false);

        Self {
            config,
            jobs,
            job_semaphore,
            shutdown,
        }
    }

    /// Handle for requesting a graceful stop.
    pub fn shutdown_handle(&self) -> watch::Sender<bool> {
        self.shutdown.clone()
    }

    /// Consume work items until the queue closes or shutdown fires.
    pub async fn run(&self, mut rx: JobReceiver) {
        info!(
            "Starting job executor with {} max concurrent jobs",
            self.config.max_concurrent_jobs
        );

        let mut shutdown_rx = self.shutdown.subscribe();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        info!("Shutdown signal received, stopping executor");
                        break;
                    }
                }
                item = rx.recv() => {
                    let Some(item) = item else {
                        info!("Queue closed, stopping executor");
                        break;
                    };

                    let permit = match Arc::clone(&self.job_semaphore).acquire_owned().await {
                        Ok(p) => p,
                        Err(_) => break,
                    };
                    let jobs = self.jobs.clone();
                    let step_delay = self.config.step_delay;

                    tokio::spawn(async move {
                        let _permit = permit;
                        pipeline::execute(&jobs, &item, step_delay).await;
                    });
                }
            }
        }

        // Drain in-flight runs before returning.
        let _ = self
            .job_semaphore
            .acquire_many(self.config.max_concurrent_jobs as u32)
            .await;
        info!("Executor stopped");
    }
}
