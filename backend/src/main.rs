//! Backend entry-point: loads settings, prepares storage and serves the
//! users API.

mod server;

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use users_backend::inbound::http::health::HealthState;
use users_backend::outbound::persistence::{
    DatabaseSettings, DbPool, ensure_users_table, load_dotenv,
};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();
    load_dotenv();

    let settings = ServerSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let database = DatabaseSettings::from_env(&DefaultEnv::new()).map_err(io::Error::other)?;
    info!(
        host = database.host(),
        database = database.database_name(),
        "connecting to database"
    );

    let pool = DbPool::new(database.pool_config())
        .await
        .map_err(io::Error::other)?;
    ensure_users_table(&pool).await.map_err(io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr()?)
        .with_cors_origins(settings.cors_origins())
        .with_db_pool(pool.clone());
    let server = create_server(health_state.clone(), config)?;

    let result = server.await;
    health_state.mark_unhealthy();
    pool.close();
    info!("server stopped");
    result
}
