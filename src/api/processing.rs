use serde::Serialize;
use tracing::info;

use crate::{
    ApiClient,
    errors::Error,
    request::ApiRequest,
    types::{JobAction, JobActionResponse, JobProgress, JobResult, Listing, ProcessingJob},
};

pub struct Processing<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Processing<'_> {
    pub async fn jobs(&self, query: &[(&str, &str)]) -> Result<Listing<ProcessingJob>, Error> {
        self.client
            .send_json(ApiRequest::get("/processing/jobs/").query(query.iter().copied()))
            .await
    }

    pub async fn job(&self, job_id: u64) -> Result<ProcessingJob, Error> {
        let path = format!("/processing/jobs/{}/", job_id);
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn create_job<B: Serialize + ?Sized>(&self, job: &B) -> Result<ProcessingJob, Error> {
        self.client
            .send_json(ApiRequest::post("/processing/jobs/create/").json(job)?)
            .await
    }

    pub async fn update_job<B: Serialize + ?Sized>(&self, job_id: u64, changes: &B) -> Result<ProcessingJob, Error> {
        let path = format!("/processing/jobs/{}/update/", job_id);
        self.client.send_json(ApiRequest::put(path).json(changes)?).await
    }

    pub async fn delete_job(&self, job_id: u64) -> Result<(), Error> {
        let path = format!("/processing/jobs/{}/delete/", job_id);
        self.client.send_empty(ApiRequest::delete(path)).await
    }

    /// Removes the job through its detail route.
    pub async fn cancel_job(&self, job_id: u64) -> Result<(), Error> {
        let path = format!("/processing/jobs/{}/", job_id);
        self.client.send_empty(ApiRequest::delete(path)).await
    }

    /// Status polling for a running job.
    pub async fn progress(&self, job_id: u64) -> Result<JobProgress, Error> {
        let path = format!("/processing/jobs/{}/progress/", job_id);
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn result(&self, job_id: u64) -> Result<JobResult, Error> {
        let path = format!("/processing/jobs/{}/result/", job_id);
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn perform_action(&self, job_id: u64, action: JobAction) -> Result<JobActionResponse, Error> {
        let path = format!("/processing/jobs/{}/action/", job_id);
        let request = ApiRequest::post(path).json(&serde_json::json!({ "action": action }))?;
        let response: JobActionResponse = self.client.send_json(request).await?;
        info!(
            "job action applied: job={} action={:?} status={:?}",
            job_id, action, response.status
        );
        Ok(response)
    }

    pub async fn stats(&self) -> Result<serde_json::Value, Error> {
        self.client
            .send_json(ApiRequest::get("/processing/jobs/stats/"))
            .await
    }

    pub async fn queue_status(&self) -> Result<serde_json::Value, Error> {
        self.client
            .send_json(ApiRequest::get("/processing/jobs/queue-status/"))
            .await
    }
}
