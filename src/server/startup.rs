use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::Error, model::app::AppState, router,
    service::seed::SeedService,
};

/// Connect to the store and run migrations
///
/// The pool holds a single connection that is never recycled, an in-memory SQLite database
/// lives only as long as the connection that created it.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(u32::MAX as u64))
        .max_lifetime(Duration::from_secs(u32::MAX as u64))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seed the store before serving if enabled in the configuration
pub async fn seed_on_startup(config: &Config, state: &AppState) -> Result<(), Error> {
    if !config.seed_on_startup {
        tracing::info!("Skipping startup seed, SEED_ON_STARTUP is disabled");
        return Ok(());
    }

    SeedService::new(&state.db)
        .with_plan(state.seed_plan.clone())
        .with_rng_seed(state.seed_rng)
        .seed_database()
        .await?;

    Ok(())
}

/// Bind the listener and serve the API until the process exits
pub async fn serve(config: &Config, state: AppState) -> Result<(), Error> {
    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}
