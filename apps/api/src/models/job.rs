use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The four application states a job can be in. Stored as TEXT; the table's
/// CHECK constraint enforces the same literal set on the store side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub link: String,
    /// Independent of created_at: the user may backdate an application.
    pub date_applied: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: JobStatus,
    pub link: String,
    pub date_applied: Option<NaiveDate>,
}

/// Partial update payload. Clients may send a full record (the UI does a
/// whole-document overwrite); unknown fields such as id and timestamps are
/// ignored on deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<JobStatus>,
    pub link: Option<String>,
    pub date_applied: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_the_four_literals() {
        for (status, literal) in [
            (JobStatus::Applied, "\"Applied\""),
            (JobStatus::Interview, "\"Interview\""),
            (JobStatus::Offer, "\"Offer\""),
            (JobStatus::Rejected, "\"Rejected\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), literal);
        }
    }

    #[test]
    fn status_rejects_unknown_literal() {
        assert!(serde_json::from_str::<JobStatus>("\"Ghosted\"").is_err());
    }

    #[test]
    fn create_request_defaults_status_to_applied() {
        let req: CreateJobRequest = serde_json::from_str(
            r#"{"company":"Acme","position":"Engineer","link":"https://acme.example/job/1"}"#,
        )
        .unwrap();
        assert_eq!(req.status, JobStatus::Applied);
        assert!(req.date_applied.is_none());
    }

    #[test]
    fn update_request_accepts_a_full_record() {
        // The UI sends the whole document back with only status changed.
        let req: UpdateJobRequest = serde_json::from_str(
            r#"{
                "id": "7f6df02f-1a0e-4b5e-9c3a-2f6d1c0a8b01",
                "company": "Acme",
                "position": "Engineer",
                "status": "Interview",
                "link": "https://acme.example/job/1",
                "dateApplied": "2026-08-20",
                "createdAt": "2026-08-20T10:00:00Z",
                "updatedAt": "2026-08-20T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(req.status, Some(JobStatus::Interview));
        assert_eq!(req.company.as_deref(), Some("Acme"));
    }
}
