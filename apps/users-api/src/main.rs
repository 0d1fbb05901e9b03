use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, UserService, seed};
use tracing::info;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors get colored reports
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let store = seed::seeded_store();
    info!(
        users = store.len(),
        max_user_id = store.max_user_id(),
        "Seeded in-memory user store"
    );

    let repository = InMemoryUserRepository::from_store(store);
    let service = UserService::new(repository);

    let app = api::app(service.clone(), config.app);

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing user repository");
    service.close().await?;

    info!("Users API shutdown complete");
    Ok(())
}
