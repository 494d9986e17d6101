/// API gateway — the single point of entry for all calls to the Jobtrack
/// service. One fixed base URL, JSON in and out, one round trip per call:
/// no caching, no retries, no deduplication.
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::{Job, JobDraft};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Acknowledgement body returned by the delete endpoint.
#[derive(Debug, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}

#[derive(Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .default_headers(headers)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_jobs(&self) -> Result<Vec<Job>, GatewayError> {
        let response = self
            .client
            .get(self.url("/api/jobs/getjobs"))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job, GatewayError> {
        let response = self
            .client
            .post(self.url("/api/jobs/createjob"))
            .json(draft)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let job: Job = response.json().await?;
        debug!("Created job {} at {}", job.id, job.company);
        Ok(job)
    }

    /// Sends the full document; the service returns null when the id no
    /// longer exists, decoded here as None.
    pub async fn update_job(&self, id: Uuid, job: &Job) -> Result<Option<Job>, GatewayError> {
        let response = self
            .client
            .put(self.url(&format!("/api/jobs/updatejob/{id}")))
            .json(job)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_job(&self, id: Uuid) -> Result<DeleteAck, GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/jobs/deletejob/{id}")))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turns a non-success response into an opaque rejection. Error bodies
    /// are passed along verbatim for the caller to log, never interpreted.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
