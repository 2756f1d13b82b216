use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::domain::{
    repositories::creator_program::CreatorProgramRepository,
    value_objects::uploads::{RecordRushUploadModel, RecordVideoUploadModel},
};
use crate::infrastructure::axum_http::error_responses::error_response;
use crate::usecases::uploads::UploadsUseCase;

pub fn routes<R>(repository: Arc<R>) -> Router
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    let uploads_usecase = UploadsUseCase::new(repository);

    Router::new()
        .route("/videos", post(record_video_upload))
        .route("/rushes", post(record_rush_upload))
        .with_state(Arc::new(uploads_usecase))
}

#[derive(Debug, Serialize)]
pub struct RecordedAssetResponse {
    pub asset_id: Uuid,
}

pub async fn record_video_upload<R>(
    State(uploads_usecase): State<Arc<UploadsUseCase<R>>>,
    auth: AuthUser,
    Json(upload): Json<RecordVideoUploadModel>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match uploads_usecase
        .record_video_upload(auth.user_id, upload)
        .await
    {
        Ok(asset_id) => {
            (StatusCode::CREATED, Json(RecordedAssetResponse { asset_id })).into_response()
        }
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn record_rush_upload<R>(
    State(uploads_usecase): State<Arc<UploadsUseCase<R>>>,
    auth: AuthUser,
    Json(upload): Json<RecordRushUploadModel>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match uploads_usecase
        .record_rush_upload(auth.user_id, upload)
        .await
    {
        Ok(asset_id) => {
            (StatusCode::CREATED, Json(RecordedAssetResponse { asset_id })).into_response()
        }
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
