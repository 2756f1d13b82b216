use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::config_model::DotEnvyConfig,
    domain::repositories::creator_program::CreatorProgramRepository,
    infrastructure::axum_http::{default_routers, routers},
};

/// Serves whichever repository backend was selected at startup; routers and
/// use-cases are generic over the contract, so both backends wire up the
/// same way.
pub async fn start<R>(config: Arc<DotEnvyConfig>, repository: Arc<R>) -> Result<()>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/v1/onboarding",
            routers::onboarding::routes(Arc::clone(&repository)),
        )
        .nest(
            "/api/v1/creators/dashboard",
            routers::creator_dashboard::routes(Arc::clone(&repository)),
        )
        .nest(
            "/api/v1/uploads",
            routers::uploads::routes(Arc::clone(&repository)),
        )
        .nest(
            "/api/v1/payout-profile",
            routers::payout_profiles::routes(Arc::clone(&repository)),
        )
        .nest(
            "/api/v1/admin",
            routers::admin::routes(Arc::clone(&repository)),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
