use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::job::{CreateJobRequest, JobRow, UpdateJobRequest};
use uuid::Uuid;

/// Returns every job, newest first.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(jobs)
}

/// Inserts a new job. The store assigns id, created_at, updated_at, and
/// date_applied when the request leaves it unset.
pub async fn create_job(pool: &PgPool, req: &CreateJobRequest) -> Result<JobRow, AppError> {
    validate_create(req)?;

    let job = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (company, position, status, link, date_applied)
        VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
        RETURNING *
        "#,
    )
    .bind(&req.company)
    .bind(&req.position)
    .bind(req.status)
    .bind(&req.link)
    .bind(req.date_applied)
    .fetch_one(pool)
    .await?;

    Ok(job)
}

/// Applies a partial update and returns the new record, or None when the id
/// resolves to nothing. A vanished record is the caller's no-op, not an error.
pub async fn update_job(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateJobRequest,
) -> Result<Option<JobRow>, AppError> {
    validate_update(req)?;

    let job = sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs SET
            company = COALESCE($2, company),
            position = COALESCE($3, position),
            status = COALESCE($4, status),
            link = COALESCE($5, link),
            date_applied = COALESCE($6, date_applied),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.company.as_deref())
    .bind(req.position.as_deref())
    .bind(req.status)
    .bind(req.link.as_deref())
    .bind(req.date_applied)
    .fetch_optional(pool)
    .await?;

    Ok(job)
}

/// Deletes the job if present. Deleting an absent id is a success: the
/// caller's intent (record gone) already holds.
pub async fn delete_job(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

fn validate_create(req: &CreateJobRequest) -> Result<(), AppError> {
    require_non_empty("company", &req.company)?;
    require_non_empty("position", &req.position)?;
    require_non_empty("link", &req.link)?;
    Ok(())
}

fn validate_update(req: &UpdateJobRequest) -> Result<(), AppError> {
    for (field, value) in [
        ("company", &req.company),
        ("position", &req.position),
        ("link", &req.link),
    ] {
        if let Some(value) = value {
            require_non_empty(field, value)?;
        }
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;

    fn valid_create() -> CreateJobRequest {
        CreateJobRequest {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: JobStatus::Applied,
            link: "https://acme.example/job/1".to_string(),
            date_applied: None,
        }
    }

    #[test]
    fn create_with_all_required_fields_passes() {
        assert!(validate_create(&valid_create()).is_ok());
    }

    #[test]
    fn create_with_blank_company_is_rejected() {
        let req = CreateJobRequest {
            company: "   ".to_string(),
            ..valid_create()
        };
        let err = validate_create(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("company")));
    }

    #[test]
    fn create_with_empty_link_is_rejected() {
        let req = CreateJobRequest {
            link: String::new(),
            ..valid_create()
        };
        assert!(validate_create(&req).is_err());
    }

    #[test]
    fn update_with_absent_fields_passes() {
        assert!(validate_update(&UpdateJobRequest::default()).is_ok());
    }

    #[test]
    fn update_blanking_a_required_field_is_rejected() {
        let req = UpdateJobRequest {
            position: Some(String::new()),
            ..Default::default()
        };
        let err = validate_update(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("position")));
    }
}
