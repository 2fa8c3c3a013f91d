//! Location ingestion service entry-point.

mod server;

use mockable::DefaultEnv;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use location_ingest::outbound::persistence::{DbPool, PoolConfig};
use location_ingest::settings::Settings;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv = dotenv::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    if let Err(e) = dotenv {
        warn!(error = %e, ".env file not loaded; using process environment only");
    }

    let settings = Settings::from_env(&DefaultEnv::new()).map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;

    info!(
        app_env = %settings.app_env,
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.name,
        "connecting to database"
    );

    let database_url = settings.database.connection_url().map_err(|e| {
        error!(error = %e, "invalid database settings");
        std::io::Error::other(e)
    })?;
    let pool_config = PoolConfig::new(database_url).with_max_size(settings.database.pool_max_size);
    let db_pool = DbPool::new(pool_config).await.map_err(|e| {
        error!(error = %e, "database pool initialisation failed");
        std::io::Error::other(e)
    })?;
    db_pool.ping().await.map_err(|e| {
        error!(error = %e, "unable to connect to database");
        std::io::Error::other(e)
    })?;

    let config = ServerConfig::new(settings.server_host, settings.server_port, db_pool)
        .with_lookup_failure_policy(settings.lookup_failure_policy);
    let bind_addr = config.bind_addr();
    let server = create_server(config)?;
    info!(
        %bind_addr,
        lookup_failure_policy = ?settings.lookup_failure_policy,
        "server listening"
    );

    server.await
}
