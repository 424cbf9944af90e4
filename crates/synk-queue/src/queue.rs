//! Bounded mpsc job queue.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::{QueueError, QueueResult};
use crate::job::ProcessUploadJob;

/// Queue configuration.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Maximum number of work items waiting for a worker.
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

impl QueueConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            capacity: std::env::var("QUEUE_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64),
        }
    }
}

/// Sending half of the job queue, held by the API layer.
///
/// `enqueue` never blocks the request path: a full queue is an error,
/// not a wait.
#[derive(Clone)]
pub struct JobQueue {
    tx: mpsc::Sender<ProcessUploadJob>,
    capacity: usize,
}

/// Receiving half, drained by the worker pool.
pub struct JobReceiver {
    rx: mpsc::Receiver<ProcessUploadJob>,
}

impl JobQueue {
    /// Create a bounded queue pair.
    pub fn bounded(config: QueueConfig) -> (JobQueue, JobReceiver) {
        let (tx, rx) = mpsc::channel(config.capacity);
        (
            JobQueue {
                tx,
                capacity: config.capacity,
            },
            JobReceiver { rx },
        )
    }

    /// Enqueue a work item.
    pub fn enqueue(&self, job: ProcessUploadJob) -> QueueResult<()> {
        let job_id = job.job_id.clone();
        self.tx.try_send(job).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => QueueError::Full(self.capacity),
            mpsc::error::TrySendError::Closed(_) => QueueError::Closed,
        })?;
        info!("Enqueued job {}", job_id);
        Ok(())
    }

    /// Number of work items currently waiting.
    pub fn len(&self) -> usize {
        self.capacity - self.tx.capacity()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobReceiver {
    /// Receive the next work item; `None` once all senders are gone.
    pub async fn recv(&mut self) -> Option<ProcessUploadJob> {
        let job = self.rx.recv().await;
        if let Some(ref job) = job {
            debug!("Dequeued job {}", job.job_id);
        }
        job
    }
}
