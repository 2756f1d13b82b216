use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::auth::AuthUser;
use crate::domain::repositories::creator_program::CreatorProgramRepository;
use crate::infrastructure::axum_http::error_responses::error_response;
use crate::usecases::onboarding::OnboardingUseCase;

pub fn routes<R>(repository: Arc<R>) -> Router
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    let onboarding_usecase = OnboardingUseCase::new(repository);

    Router::new()
        .route("/options", get(onboarding_options))
        .route("/marketing", get(marketing_data))
        .with_state(Arc::new(onboarding_usecase))
}

pub async fn onboarding_options<R>(
    State(onboarding_usecase): State<Arc<OnboardingUseCase<R>>>,
    _auth: AuthUser,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match onboarding_usecase.onboarding_options().await {
        Ok(options) => Json(options).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

/// Public: backs the apply/login pages, no authentication required.
pub async fn marketing_data<R>(
    State(onboarding_usecase): State<Arc<OnboardingUseCase<R>>>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match onboarding_usecase.marketing_data().await {
        Ok(data) => Json(data).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
