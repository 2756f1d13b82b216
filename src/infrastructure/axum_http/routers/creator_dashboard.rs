use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::domain::repositories::creator_program::CreatorProgramRepository;
use crate::infrastructure::axum_http::error_responses::error_response;
use crate::usecases::creator_dashboard::CreatorDashboardUseCase;

pub fn routes<R>(repository: Arc<R>) -> Router
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    let dashboard_usecase = CreatorDashboardUseCase::new(repository);

    Router::new()
        .route("/", get(dashboard))
        .with_state(Arc::new(dashboard_usecase))
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub month: Option<String>,
}

pub async fn dashboard<R>(
    State(dashboard_usecase): State<Arc<CreatorDashboardUseCase<R>>>,
    auth: AuthUser,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    match dashboard_usecase
        .dashboard(auth.user_id, query.month.as_deref())
        .await
    {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
