//! View state for the tracker: the local mirror of the job list, the active
//! status filter, and the add-application form. Every remote call reconciles
//! by taking the server's response as the new truth; failures are logged and
//! local state is left as it was.

use tracing::warn;
use uuid::Uuid;

use crate::model::{Job, JobDraft, JobStatus};
use crate::store::JobStore;

/// Active list filter: everything, or exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

pub struct AppView<S: JobStore> {
    store: S,
    pub applications: Vec<Job>,
    pub status_filter: StatusFilter,
    pub form: JobDraft,
    pub show_form: bool,
}

impl<S: JobStore> AppView<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            applications: Vec::new(),
            status_filter: StatusFilter::All,
            form: JobDraft::default(),
            show_form: false,
        }
    }

    /// Initial mount: one wholesale fetch. On failure the list stays empty;
    /// there is no retry and no error surface beyond the log line.
    pub async fn load(&mut self) {
        match self.store.list().await {
            Ok(jobs) => self.applications = jobs,
            Err(err) => warn!("Error fetching jobs: {err:#}"),
        }
    }

    pub fn open_form(&mut self) {
        self.show_form = true;
    }

    /// Submits the draft. On success the returned record is prepended (the
    /// list is newest-first) and the form resets and hides; on failure the
    /// form stays open with the user's input intact.
    pub async fn submit_form(&mut self) {
        match self.store.create(&self.form).await {
            Ok(job) => {
                self.applications.insert(0, job);
                self.form = JobDraft::default();
                self.show_form = false;
            }
            Err(err) => warn!("Error adding job: {err:#}"),
        }
    }

    /// Dispatches a whole-document overwrite with only the status changed,
    /// then replaces the local entry with the record the server returns.
    /// A None result means the record vanished server-side; the stale local
    /// entry is left alone rather than guessed at.
    pub async fn set_status(&mut self, id: Uuid, status: JobStatus) {
        let Some(current) = self.applications.iter().find(|job| job.id == id) else {
            return;
        };
        let mut doc = current.clone();
        doc.status = status;

        match self.store.update(id, &doc).await {
            Ok(Some(updated)) => {
                if let Some(slot) = self.applications.iter_mut().find(|job| job.id == id) {
                    *slot = updated;
                }
            }
            Ok(None) => {}
            Err(err) => warn!("Error updating job {id}: {err:#}"),
        }
    }

    /// Deletes remotely, then drops the local entry. On failure the entry
    /// keeps being displayed; the inconsistency is not reconciled.
    pub async fn remove(&mut self, id: Uuid) {
        match self.store.delete(id).await {
            Ok(()) => self.applications.retain(|job| job.id != id),
            Err(err) => warn!("Error deleting job {id}: {err:#}"),
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Pure local projection of the list through the active filter. No
    /// network effect, order preserved.
    pub fn visible(&self) -> Vec<&Job> {
        self.applications
            .iter()
            .filter(|job| self.status_filter.matches(job.status))
            .collect()
    }
}
