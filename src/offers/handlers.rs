use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
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

use super::dto::{CreateOfferInput, OfferFilter};
use super::model::Offer;

pub fn router() -> Router<AppState> {
    Router::new().route("/rest/v1/job_offers", post(create_offers).get(list_offers))
}

/// POST /rest/v1/job_offers — accepts one object or an array. Every offer
/// must reference a job that exists; the whole batch is rejected before
/// anything is stored otherwise. Jobs are never deleted, so the check cannot
/// go stale between validation and insert.
#[instrument(skip(state, body))]
async fn create_offers(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Vec<Offer>>)> {
    let inputs = rest::decode_batch::<CreateOfferInput>(body)?;
    for input in &inputs {
        if !state.store.job_exists(&input.job_id).await {
            return Err(ApiError::Validation(format!(
                "job {} does not exist",
                input.job_id
            )));
        }
    }

    let mut created = Vec::with_capacity(inputs.len());
    for input in inputs {
        created.push(state.store.insert_offer(input, &user_id).await);
    }
    debug!(count = created.len(), "offers created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /rest/v1/job_offers with optional job_id/offered_by_id/status filters,
/// newest first.
#[instrument(skip(state))]
async fn list_offers(
    State(state): State<AppState>,
    Query(filter): Query<OfferFilter>,
) -> Json<Vec<Offer>> {
    Json(state.store.list_offers(&filter).await)
}
