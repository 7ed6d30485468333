use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::entities::drug::{self, DrugLookupRequest, DrugLookupResponse};
use crate::entities::interactions::{self, InteractionsRequest, InteractionsResponse};
use crate::error::DrugCheckerError;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/drug", post(get_drug))
        .route("/interactions", post(post_interactions))
        .layer(TraceLayer::new_for_http())
}

fn body_or_400<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, DrugCheckerError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| DrugCheckerError::InvalidArgument(rejection.body_text()))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

async fn get_drug(
    State(state): State<AppState>,
    payload: Result<Json<DrugLookupRequest>, JsonRejection>,
) -> Result<Json<DrugLookupResponse>, DrugCheckerError> {
    let req = body_or_400(payload)?;
    let resp = drug::lookup(&state.openfda, &req.name).await?;
    Ok(Json(resp))
}

async fn post_interactions(
    payload: Result<Json<InteractionsRequest>, JsonRejection>,
) -> Result<Json<InteractionsResponse>, DrugCheckerError> {
    let req = body_or_400(payload)?;
    Ok(Json(interactions::summarize(&req.drugs)?))
}
