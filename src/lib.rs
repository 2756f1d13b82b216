pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecases;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::{
    axum_http::http_serve,
    memory::creator_program::CreatorProgramInMemory,
    postgres::{postgres_connection, repositories::creator_program::CreatorProgramPostgres},
};

pub async fn run() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config::config_loader::load()?;
    info!("ENV has been loaded");

    // The backend is picked exactly once, here, and handed down by Arc;
    // everything below this point is generic over the repository contract.
    match config.database.clone() {
        Some(database) => {
            let postgres_pool = postgres_connection::establish_connection(&database.url)?;
            info!("Postgres connection has been established");

            let repository = CreatorProgramPostgres::new(Arc::new(postgres_pool));
            http_serve::start(Arc::new(config), Arc::new(repository)).await
        }
        None => {
            warn!("DATABASE_URL is not set, falling back to the in-memory store");

            let repository = CreatorProgramInMemory::with_reference_catalog();
            http_serve::start(Arc::new(config), Arc::new(repository)).await
        }
    }
}
