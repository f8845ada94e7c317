//! # Pokedex Server
//!
//! Main entry point. Loads configuration, wires every component and serves
//! the REST API until shutdown.

use pokedex_config::{ConfigLoader, ObservabilityConfig};
use pokedex_server::{
    app::Application,
    startup::{init_logging, print_banner},
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();
    info!("Starting Pokedex Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let result = match Application::build(config).await {
        Ok(app) => app.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
