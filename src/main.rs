use agape::server::{config::Config, model::app::AppState, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), agape::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    let state = AppState {
        seed_rng: config.seed_rng,
        ..AppState::from(db)
    };
    startup::seed_on_startup(&config, &state).await?;

    tracing::info!("Starting server");

    startup::serve(&config, state).await
}
