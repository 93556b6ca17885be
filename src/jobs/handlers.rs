use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    rest,
    state::AppState,
};

use super::dto::{CreateJobInput, JobFilter, JobPatch};
use super::model::{Job, JobStatus};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/rest/v1/jobs",
            post(create_jobs).get(list_jobs).patch(update_job),
        )
        .route("/api/jobs", post(create_job_legacy))
        .route("/api/bounties", get(list_bounties_legacy))
}

/// POST /rest/v1/jobs — accepts one object or an array, returns the created
/// array.
#[instrument(skip(state, body))]
async fn create_jobs(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Vec<Job>>)> {
    let inputs = rest::decode_batch::<CreateJobInput>(body)?;
    let mut created = Vec::with_capacity(inputs.len());
    for input in inputs {
        created.push(state.store.insert_job(input, &user_id).await);
    }
    debug!(count = created.len(), "jobs created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /rest/v1/jobs with optional status/claimed_by_id/posted_by_id filters,
/// newest first.
#[instrument(skip(state))]
async fn list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Json<Vec<Job>> {
    Json(state.store.list_jobs(&filter).await)
}

/// PATCH /rest/v1/jobs — the payload must carry the target `id`; the
/// remaining keys form the patch. Returns the updated job as a one-element
/// array.
#[instrument(skip(state, body))]
async fn update_job(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> ApiResult<Json<Vec<Job>>> {
    let id = rest::take_id(&mut body)?;
    let patch: JobPatch =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    let job = state.store.patch_job(&id, patch).await?;
    debug!(id = %job.id, "job patched");
    Ok(Json(vec![job]))
}

/// POST /api/jobs — pre-Supabase creation endpoint kept for older clients.
#[instrument(skip(state, body))]
async fn create_job_legacy(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let input: CreateJobInput =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    let job = state.store.insert_job(input, &user_id).await;
    Ok(Json(serde_json::json!({ "job": job, "success": true })))
}

/// GET /api/bounties — open jobs, newest first.
#[instrument(skip(state))]
async fn list_bounties_legacy(State(state): State<AppState>) -> Json<Vec<Job>> {
    let filter = JobFilter {
        status: Some(JobStatus::Open),
        ..Default::default()
    };
    Json(state.store.list_jobs(&filter).await)
}
