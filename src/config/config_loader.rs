use anyhow::Result;

use super::config_model::{Database, DotEnvyConfig, Server, Supabase};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    };

    // No DATABASE_URL means the in-memory store; the service stays runnable
    // with zero external dependencies.
    let database = std::env::var("DATABASE_URL").ok().map(|url| Database { url });

    let supabase = Supabase {
        jwt_secret: std::env::var("SUPABASE_JWT_SECRET").expect("SUPABASE_JWT_SECRET is invalid"),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        supabase,
    })
}
