use tracing_subscriber::{EnvFilter, fmt};

use timesheets::shell::config::AppConfig;
use timesheets::shell::http::router;
use timesheets::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    // In-memory store for now
    let app = router(AppState::in_memory());

    tracing::info!("Timesheets endpoint: http://{}/timesheets", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
