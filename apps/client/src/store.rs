//! Pluggable persistence behind the view layer. The UI talks to a `JobStore`
//! and does not care whether records live in the remote service or in local
//! memory; the two implementations mirror the repository's two front-end
//! variants and are selected at composition time.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::gateway::ApiGateway;
use crate::model::{Job, JobDraft};

#[async_trait]
pub trait JobStore: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<Job>>;

    /// Persists a draft and returns the stored record with its assigned id.
    async fn create(&self, draft: &JobDraft) -> Result<Job>;

    /// Whole-document overwrite. Returns None when the id no longer exists.
    async fn update(&self, id: Uuid, job: &Job) -> Result<Option<Job>>;

    /// Idempotent: deleting an absent id succeeds.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
impl<S: JobStore + ?Sized> JobStore for std::sync::Arc<S> {
    async fn list(&self) -> Result<Vec<Job>> {
        (**self).list().await
    }

    async fn create(&self, draft: &JobDraft) -> Result<Job> {
        (**self).create(draft).await
    }

    async fn update(&self, id: Uuid, job: &Job) -> Result<Option<Job>> {
        (**self).update(id, job).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        (**self).delete(id).await
    }
}

/// Service-backed store: every call is one round trip through the gateway.
pub struct RemoteStore {
    gateway: ApiGateway,
}

impl RemoteStore {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl JobStore for RemoteStore {
    async fn list(&self) -> Result<Vec<Job>> {
        Ok(self.gateway.get_jobs().await?)
    }

    async fn create(&self, draft: &JobDraft) -> Result<Job> {
        Ok(self.gateway.create_job(draft).await?)
    }

    async fn update(&self, id: Uuid, job: &Job) -> Result<Option<Job>> {
        Ok(self.gateway.update_job(id, job).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.gateway.delete_job(id).await?;
        Ok(())
    }
}

/// In-process store with client-generated ids. Keeps records newest first so
/// its list output matches the service's created_at ordering.
#[derive(Default)]
pub struct MemoryStore {
    jobs: Mutex<Vec<Job>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.lock().await.clone())
    }

    async fn create(&self, draft: &JobDraft) -> Result<Job> {
        let now = Utc::now();
        let job = Job {
            id: Uuid::new_v4(),
            company: draft.company.clone(),
            position: draft.position.clone(),
            status: draft.status,
            link: draft.link.clone(),
            date_applied: draft.date_applied,
            created_at: now,
            updated_at: now,
        };
        self.jobs.lock().await.insert(0, job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, job: &Job) -> Result<Option<Job>> {
        let mut jobs = self.jobs.lock().await;
        let Some(slot) = jobs.iter_mut().find(|j| j.id == id) else {
            return Ok(None);
        };
        slot.company = job.company.clone();
        slot.position = job.position.clone();
        slot.status = job.status;
        slot.link = job.link.clone();
        slot.date_applied = job.date_applied;
        slot.updated_at = Utc::now();
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.jobs.lock().await.retain(|j| j.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobStatus;

    fn draft(company: &str) -> JobDraft {
        JobDraft {
            company: company.to_string(),
            position: "Engineer".to_string(),
            link: "https://example.com/job".to_string(),
            ..JobDraft::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_defaults_to_applied() {
        let store = MemoryStore::new();
        let a = store.create(&draft("Acme")).await.unwrap();
        let b = store.create(&draft("Globex")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.status, JobStatus::Applied);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryStore::new();
        store.create(&draft("First")).await.unwrap();
        store.create(&draft("Second")).await.unwrap();
        store.create(&draft("Third")).await.unwrap();

        let companies: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.company)
            .collect();
        assert_eq!(companies, ["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn create_then_list_round_trips_submitted_fields() {
        let store = MemoryStore::new();
        let submitted = draft("Acme");
        let created = store.create(&submitted).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].company, submitted.company);
        assert_eq!(listed[0].position, submitted.position);
        assert_eq!(listed[0].link, submitted.link);
        assert_eq!(listed[0].date_applied, submitted.date_applied);
    }

    #[tokio::test]
    async fn update_overwrites_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let created = store.create(&draft("Acme")).await.unwrap();

        let mut doc = created.clone();
        doc.status = JobStatus::Offer;
        let updated = store.update(created.id, &doc).await.unwrap().unwrap();

        assert_eq!(updated.status, JobStatus::Offer);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_of_unknown_id_returns_none() {
        let store = MemoryStore::new();
        let created = store.create(&draft("Acme")).await.unwrap();
        let result = store.update(Uuid::new_v4(), &created).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn double_delete_is_a_no_op_success() {
        let store = MemoryStore::new();
        let created = store.create(&draft("Acme")).await.unwrap();

        store.delete(created.id).await.unwrap();
        store.delete(created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
