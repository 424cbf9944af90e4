//! Typed repository for upload jobs.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use synk_models::{Job, JobId, JobStatus, PipelineStep};

use crate::error::{StoreError, StoreResult};
use crate::store::{Document, DocumentStore};

/// Collection holding one document per upload job.
pub const JOBS_COLLECTION: &str = "videojob";

/// Repository for job documents.
///
/// All writes address the record by its immutable [`JobId`], so a
/// runner can hold one repository handle for the whole run and never
/// re-resolve the job through a mutable query.
#[derive(Clone)]
pub struct JobRepository {
    store: Arc<DocumentStore>,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Create a new job record.
    pub async fn create(&self, job: &Job) -> StoreResult<()> {
        let fields = to_document(job)?;
        self.store
            .create_document(JOBS_COLLECTION, job.id.as_str(), fields)
            .await?;
        info!("Created job record: {}", job.id);
        Ok(())
    }

    /// Get a job by ID.
    pub async fn get(&self, id: &JobId) -> StoreResult<Option<Job>> {
        match self.store.get_document(JOBS_COLLECTION, id.as_str()).await {
            Some(doc) => {
                let job = serde_json::from_value(Value::Object(doc))?;
                Ok(Some(job))
            }
            None => Ok(None),
        }
    }

    /// Mark a step as running: `processing`, step name, progress target.
    pub async fn begin_step(&self, id: &JobId, step: PipelineStep) -> StoreResult<()> {
        let mut fields = Document::new();
        fields.insert("status".to_string(), json!(JobStatus::Processing));
        fields.insert("current_step".to_string(), json!(step));
        fields.insert("progress".to_string(), json!(step.progress_target()));
        fields.insert("updated_at".to_string(), json!(Utc::now()));

        self.store
            .update_document(JOBS_COLLECTION, id.as_str(), fields)
            .await
    }

    /// Mark a job as completed with its render locator.
    pub async fn complete(&self, id: &JobId, render_url: &str) -> StoreResult<()> {
        let mut fields = Document::new();
        fields.insert("status".to_string(), json!(JobStatus::Completed));
        fields.insert("progress".to_string(), json!(100));
        fields.insert("render_url".to_string(), json!(render_url));
        fields.insert("updated_at".to_string(), json!(Utc::now()));

        self.store
            .update_document(JOBS_COLLECTION, id.as_str(), fields)
            .await?;
        info!("Job {} completed", id);
        Ok(())
    }

    /// Mark a job as failed with a human-readable cause.
    pub async fn fail(&self, id: &JobId, error: &str) -> StoreResult<()> {
        let mut fields = Document::new();
        fields.insert("status".to_string(), json!(JobStatus::Failed));
        fields.insert("error".to_string(), json!(error));
        fields.insert("updated_at".to_string(), json!(Utc::now()));

        self.store
            .update_document(JOBS_COLLECTION, id.as_str(), fields)
            .await?;
        info!("Job {} failed: {}", id, error);
        Ok(())
    }
}

fn to_document(job: &Job) -> StoreResult<Document> {
    use serde::de::Error as _;
    match serde_json::to_value(job)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(serde_json::Error::custom(
            format!("job serialized to non-object value: {other}"),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> JobRepository {
        JobRepository::new(Arc::new(DocumentStore::new()))
    }

    fn new_job() -> Job {
        Job::new(JobId::new(), Some("a@b.com".into()), "clip.mp4", 1024)
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let repo = repo();
        let job = new_job();
        repo.create(&job).await.unwrap();

        let fetched = repo.get(&job.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, job.id);
        assert_eq!(fetched.status, JobStatus::Queued);
        assert_eq!(fetched.progress, 0);
        assert_eq!(fetched.current_step, Some(PipelineStep::AnalyzeContent));
        assert_eq!(fetched.size_bytes, 1024);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repo();
        assert!(repo.get(&JobId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_begin_step_updates_only_step_fields() {
        let repo = repo();
        let job = new_job();
        repo.create(&job).await.unwrap();

        repo.begin_step(&job.id, PipelineStep::DetectCuts)
            .await
            .unwrap();

        let fetched = repo.get(&job.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, JobStatus::Processing);
        assert_eq!(fetched.current_step, Some(PipelineStep::DetectCuts));
        assert_eq!(fetched.progress, 30);
        assert!(fetched.updated_at >= job.updated_at);
        // Immutable fields are untouched.
        assert_eq!(fetched.filename, job.filename);
        assert_eq!(fetched.created_at, job.created_at);
        assert!(fetched.render_url.is_none());
        assert!(fetched.error.is_none());
    }

    #[tokio::test]
    async fn test_complete_sets_render_url_only() {
        let repo = repo();
        let job = new_job();
        repo.create(&job).await.unwrap();

        repo.complete(&job.id, "/api/demo/render/x.mp4").await.unwrap();

        let fetched = repo.get(&job.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, JobStatus::Completed);
        assert_eq!(fetched.progress, 100);
        assert_eq!(fetched.render_url.as_deref(), Some("/api/demo/render/x.mp4"));
        assert!(fetched.error.is_none());
        assert!(fetched.is_terminal());
    }

    #[tokio::test]
    async fn test_fail_sets_error_only() {
        let repo = repo();
        let job = new_job();
        repo.create(&job).await.unwrap();

        repo.fail(&job.id, "input file vanished").await.unwrap();

        let fetched = repo.get(&job.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, JobStatus::Failed);
        assert_eq!(fetched.error.as_deref(), Some("input file vanished"));
        assert!(fetched.render_url.is_none());
        assert!(fetched.is_terminal());
    }

    #[tokio::test]
    async fn test_update_unknown_job_is_not_found() {
        let repo = repo();
        let err = repo
            .begin_step(&JobId::new(), PipelineStep::first())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
