use std::sync::Arc;
use std::time::Duration;

use calendario_backend::{BackendConfig, CalendarioHomeController, DbConnection, SqliteCalendarioRepository};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BackendConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url, config.max_connections).await?;
    let repository = Arc::new(SqliteCalendarioRepository::new(db));

    let home = CalendarioHomeController::new(repository);
    let mut updates = home.subscribe();

    // An empty table never changes the initial state, so don't wait forever
    if tokio::time::timeout(Duration::from_secs(2), updates.changed()).await.is_err() {
        warn!("No calendario list received yet");
    }

    let state = home.ui_state();
    info!("{} calendarios stored", state.calendario_list.len());
    for calendario in &state.calendario_list {
        info!(
            id = calendario.id,
            dias = calendario.dias,
            semanas = calendario.semanas,
            "{} - {}",
            calendario.mes,
            calendario.festividad
        );
    }

    Ok(())
}
