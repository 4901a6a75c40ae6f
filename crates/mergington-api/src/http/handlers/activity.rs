//! Activity roster handlers for the REST API.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use mergington_types::activity::{Activity, ActivityCatalog, SignupRequest, WithdrawRequest};

use crate::http::error::AppError;
use crate::http::extractors::query::SignupQuery;
use crate::http::response::MessageResponse;
use crate::state::AppState;

/// GET /activities - Every activity with its roster, in seed order.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(state.activity_service.list())
}

/// GET /activities/{activity_name} - A single activity.
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, AppError> {
    let activity = state.activity_service.get(&activity_name)?;
    Ok(Json(activity))
}

/// POST /activities/{activity_name}/signup?email={email} - Sign a student up.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let request = SignupRequest {
        activity_name,
        email: query.email,
    };

    let change = state.activity_service.signup(&request)?;
    Ok(Json(change.into()))
}

/// DELETE /activities/{activity_name}/participants/{email} - Remove a student.
pub async fn withdraw(
    State(state): State<AppState>,
    Path((activity_name, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    let request = WithdrawRequest {
        activity_name,
        email,
    };

    let change = state.activity_service.withdraw(&request)?;
    Ok(Json(change.into()))
}
