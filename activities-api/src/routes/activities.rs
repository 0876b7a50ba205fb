use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{ActivitiesResponse, ActivityResponse, MessageResponse},
    app_state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_activities))
        .route("/:activity_name/signup", post(signup))
        .route("/:activity_name/unregister", delete(unregister))
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

#[instrument(name = "GET /activities", skip(app_state))]
async fn list_activities(
    State(app_state): State<AppState>,
) -> Result<Json<ActivitiesResponse>, ApiError> {
    let rosters = app_state.activity_service.list_activities().await?;

    let response = rosters
        .into_iter()
        .map(|(name, roster)| (name, ActivityResponse::from(roster)))
        .collect();

    Ok(Json(response))
}

#[instrument(name = "POST /activities/:activity_name/signup", skip(app_state))]
async fn signup(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let change = app_state
        .activity_service
        .signup(&activity_name, &query.email)
        .await?;

    Ok(Json(change.into()))
}

#[instrument(name = "DELETE /activities/:activity_name/unregister", skip(app_state))]
async fn unregister(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let change = app_state
        .activity_service
        .unregister(&activity_name, &query.email)
        .await?;

    Ok(Json(change.into()))
}
