use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::service;
use crate::models::job::{CreateJobRequest, JobRow, UpdateJobRequest};
use crate::state::AppState;

/// GET /api/jobs/getjobs
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = service::list_jobs(&state.db).await?;
    Ok(Json(jobs))
}

/// POST /api/jobs/createjob
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let job = service::create_job(&state.db, &req).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/updatejob/:id
/// Responds 200 with a null body when the id no longer exists.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<Option<JobRow>>, AppError> {
    let job = service::update_job(&state.db, id, &req).await?;
    Ok(Json(job))
}

/// DELETE /api/jobs/deletejob/:id
/// Idempotent: reports deletion even when the id was already absent.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    service::delete_job(&state.db, id).await?;
    Ok(Json(json!({ "message": "Job deleted" })))
}
