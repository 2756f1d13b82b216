use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use crate::auth::AuthUser;
use crate::domain::{
    repositories::creator_program::CreatorProgramRepository,
    value_objects::payout_profiles::SavePayoutProfileModel,
};
use crate::infrastructure::axum_http::error_responses::error_response;
use crate::usecases::payout_profiles::PayoutProfileUseCase;

pub fn routes<R>(repository: Arc<R>) -> Router
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    let payout_profile_usecase = PayoutProfileUseCase::new(repository);

    Router::new()
        .route("/", get(get_profile))
        .route("/", put(save_profile))
        .with_state(Arc::new(payout_profile_usecase))
}

pub async fn get_profile<R>(
    State(payout_profile_usecase): State<Arc<PayoutProfileUseCase<R>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match payout_profile_usecase.get_profile(auth.user_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn save_profile<R>(
    State(payout_profile_usecase): State<Arc<PayoutProfileUseCase<R>>>,
    auth: AuthUser,
    Json(profile): Json<SavePayoutProfileModel>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match payout_profile_usecase
        .save_profile(auth.user_id, profile)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
