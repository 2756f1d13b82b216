use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::domain::{
    repositories::creator_program::CreatorProgramRepository,
    value_objects::enums::application_statuses::ApplicationStatus,
};
use crate::infrastructure::axum_http::error_responses::error_response;
use crate::usecases::admin::AdminUseCase;

pub fn routes<R>(repository: Arc<R>) -> Router
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    let admin_usecase = AdminUseCase::new(repository);

    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/applications", get(list_applications))
        .route("/trackings/:tracking_id/payment", post(mark_tracking_paid))
        .with_state(Arc::new(admin_usecase))
}

fn ensure_admin(auth: &AuthUser) -> Result<(), Response> {
    if auth.is_admin() {
        Ok(())
    } else {
        Err(error_response(
            StatusCode::FORBIDDEN,
            "admin role required",
        ))
    }
}

pub async fn dashboard<R>(
    State(admin_usecase): State<Arc<AdminUseCase<R>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    if let Err(rejection) = ensure_admin(&auth) {
        return rejection;
    }

    match admin_usecase.dashboard().await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationsQuery {
    pub status: Option<String>,
}

pub async fn list_applications<R>(
    State(admin_usecase): State<Arc<AdminUseCase<R>>>,
    auth: AuthUser,
    Query(query): Query<ApplicationsQuery>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    if let Err(rejection) = ensure_admin(&auth) {
        return rejection;
    }

    let status = query
        .status
        .as_deref()
        .map(ApplicationStatus::from_str);

    match admin_usecase.list_applications(status).await {
        Ok(applications) => Json(applications).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

/// `paid_at: null` (or an empty body field) clears the payment mark.
#[derive(Debug, Deserialize)]
pub struct MarkTrackingPaidModel {
    pub paid_at: Option<DateTime<Utc>>,
}

pub async fn mark_tracking_paid<R>(
    State(admin_usecase): State<Arc<AdminUseCase<R>>>,
    auth: AuthUser,
    Path(tracking_id): Path<Uuid>,
    Json(payload): Json<MarkTrackingPaidModel>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    if let Err(rejection) = ensure_admin(&auth) {
        return rejection;
    }

    match admin_usecase
        .mark_tracking_paid(tracking_id, payload.paid_at)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
