//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use pokedex_core::PokedexError;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Plain environment variables understood for compatibility with existing
/// deployments, mapped to their configuration keys.
const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DB_POOL_MIN", "database.min_connections"),
    ("DB_POOL_MAX", "database.max_connections"),
    ("REDIS_HOST", "redis.host"),
    ("REDIS_PORT", "redis.port"),
    ("REDIS_DB", "redis.db"),
    ("POKEMON_CACHE_TTL", "cache.ttl_secs"),
    ("POKEMON_DATA_FILE", "provider.data_file"),
];

/// Loads and validates [`AppConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `config_dir` and the process environment.
    ///
    /// Sources, later ones winning:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `POKEDEX__` prefix
    /// 5. Plain variables such as `REDIS_HOST` or `PORT`
    ///
    /// A `.env` file in the working directory is read first.
    pub fn load(config_dir: &str) -> Result<AppConfig, PokedexError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_with_vars(config_dir, &vars)
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<AppConfig, PokedexError> {
        Self::load("./config")
    }

    fn load_with_vars(
        config_dir: &str,
        vars: &HashMap<String, String>,
    ) -> Result<AppConfig, PokedexError> {
        let environment = vars
            .get("POKEDEX_ENVIRONMENT")
            .map_or("development", String::as_str);

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("POKEDEX")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        builder = apply_legacy_overrides(builder, |name| vars.get(name).cloned())
            .map_err(config_error_to_pokedex_error)?;

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_pokedex_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| PokedexError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

/// Applies [`LEGACY_ENV_VARS`] found by `lookup` as overrides.
fn apply_legacy_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_VARS {
        if let Some(value) = lookup(var) {
            debug!("Overriding {} from {}", key, var);
            builder = builder.set_override(*key, value)?;
        }
    }
    Ok(builder)
}

fn config_error_to_pokedex_error(err: ConfigError) -> PokedexError {
    PokedexError::Configuration(err.to_string())
}
