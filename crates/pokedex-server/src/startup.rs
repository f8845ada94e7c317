//! Server startup utilities.

use pokedex_config::{AppConfig, ObservabilityConfig};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is a no-op.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},pokedex=debug,tower_http=debug",
            config.log_level.to_lowercase()
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    if result.is_err() {
        warn!("Logging already initialized");
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
     ____       _            _
    |  _ \ ___ | | _____  __| | _____  __
    | |_) / _ \| |/ / _ \/ _` |/ _ \ \/ /
    |  __/ (_) |   <  __/ (_| |  __/>  <
    |_|   \___/|_|\_\___|\__,_|\___/_/\_\
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig, cache_enabled: bool) {
    let port = config.server.port;
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}", config.server.addr());
    info!("Health:    http://0.0.0.0:{}/api/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    info!(
        "Cache:     {} (TTL {}s)",
        if cache_enabled { "enabled" } else { "disabled" },
        config.cache.ttl_secs
    );
    info!("Catalog:   {}", config.provider.data_file.display());
    info!("{}", separator);
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        let config = ObservabilityConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        init_logging(&ObservabilityConfig::default());
        print_banner();
        print_startup_info(&AppConfig::default(), false);
    }
}
