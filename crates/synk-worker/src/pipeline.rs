//! The simulated processing pipeline.

use std::time::Duration;

use tracing::{error, info};

use synk_models::{JobId, PipelineStep};
use synk_queue::ProcessUploadJob;
use synk_store::JobRepository;

use crate::error::{WorkerError, WorkerResult};

/// Synthetic locator for the placeholder output of a job.
pub fn render_url_for(job_id: &JobId) -> String {
    format!("/api/demo/render/{job_id}.mp4")
}

/// Drive one job through the step sequence.
///
/// Per step: persist `processing` + step name + progress target, then
/// pause for `step_delay`. After the final step the job is completed
/// with its render locator. Every write addresses the job by its
/// immutable ID; nothing is re-resolved mid-run.
pub async fn run_pipeline(
    jobs: &JobRepository,
    item: &ProcessUploadJob,
    step_delay: Duration,
) -> WorkerResult<String> {
    tokio::fs::metadata(&item.input_path).await.map_err(|e| {
        WorkerError::InputUnavailable(format!("{}: {}", item.input_path.display(), e))
    })?;

    for step in PipelineStep::SEQUENCE {
        jobs.begin_step(&item.job_id, step).await?;
        tokio::time::sleep(step_delay).await;
    }

    let render_url = render_url_for(&item.job_id);
    jobs.complete(&item.job_id, &render_url).await?;
    Ok(render_url)
}

/// Run the pipeline for one work item, recording any failure on the
/// job record. No retry, no rollback of prior progress fields.
pub async fn execute(jobs: &JobRepository, item: &ProcessUploadJob, step_delay: Duration) {
    info!("Processing job {} ({})", item.job_id, item.input_path.display());

    match run_pipeline(jobs, item, step_delay).await {
        Ok(render_url) => {
            info!("Job {} rendered to {}", item.job_id, render_url);
        }
        Err(e) => {
            error!("Job {} failed: {}", item.job_id, e);
            if let Err(store_err) = jobs.fail(&item.job_id, &e.to_string()).await {
                error!(
                    "Could not record failure for job {}: {}",
                    item.job_id, store_err
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    use synk_models::{Job, JobStatus};
    use synk_store::DocumentStore;

    fn repo() -> JobRepository {
        JobRepository::new(Arc::new(DocumentStore::new()))
    }

    async fn seeded_job(jobs: &JobRepository, input: &std::path::Path) -> ProcessUploadJob {
        let id = JobId::new();
        let job = Job::new(id.clone(), None, "clip.mp4", 4);
        jobs.create(&job).await.unwrap();
        ProcessUploadJob::new(id, input)
    }

    #[tokio::test]
    async fn test_happy_path_completes() {
        let jobs = repo();
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(b"vid!").unwrap();
        let item = seeded_job(&jobs, input.path()).await;

        let url = run_pipeline(&jobs, &item, Duration::ZERO).await.unwrap();
        assert_eq!(url, format!("/api/demo/render/{}.mp4", item.job_id));

        let job = jobs.get(&item.job_id).await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.progress, 100);
        assert_eq!(job.current_step, Some(PipelineStep::ColorAndExport));
        assert_eq!(job.render_url.as_deref(), Some(url.as_str()));
        assert!(job.error.is_none());
    }

    #[tokio::test]
    async fn test_missing_input_records_failure() {
        let jobs = repo();
        let item = seeded_job(&jobs, std::path::Path::new("/nonexistent/clip.mp4")).await;

        execute(&jobs, &item, Duration::ZERO).await;

        let job = jobs.get(&item.job_id).await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.error.unwrap().contains("/nonexistent/clip.mp4"));
        assert!(job.render_url.is_none());
        // No rollback: prior progress fields keep their last values.
        assert_eq!(job.progress, 0);
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_steps_ordered() {
        let jobs = repo();
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(b"vid!").unwrap();
        let item = seeded_job(&jobs, input.path()).await;

        let runner = {
            let jobs = jobs.clone();
            let item = item.clone();
            tokio::spawn(async move { run_pipeline(&jobs, &item, Duration::from_millis(15)).await })
        };

        let mut observed = Vec::new();
        loop {
            let job = jobs.get(&item.job_id).await.unwrap().unwrap();
            observed.push((job.progress, job.current_step.unwrap()));
            if job.is_terminal() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(3)).await;
        }
        runner.await.unwrap().unwrap();

        let progresses: Vec<u8> = observed.iter().map(|(p, _)| *p).collect();
        assert!(progresses.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*progresses.last().unwrap(), 100);

        // Observed steps appear in table order with matching targets.
        let order: Vec<PipelineStep> = PipelineStep::SEQUENCE.to_vec();
        let mut last_index = 0;
        for (progress, step) in &observed {
            let index = order.iter().position(|s| s == step).unwrap();
            assert!(index >= last_index);
            last_index = index;
            if *progress > 0 && *progress < 100 {
                assert_eq!(*progress, step.progress_target());
            }
        }
    }
}
