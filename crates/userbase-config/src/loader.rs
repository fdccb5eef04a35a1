//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use userbase_core::{UserbaseError, UserbaseResult};

/// Prefix for structured environment overrides, e.g. `USERBASE__SERVER__PORT`.
pub const ENV_PREFIX: &str = "USERBASE";

/// Conventional variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Selects the environment-specific file, e.g. `config/production.toml`.
pub const ENVIRONMENT_VAR: &str = "USERBASE_ENVIRONMENT";

/// Loads [`AppConfig`] once at startup.
///
/// Sources are applied in order, later ones winning:
/// 1. `{config_dir}/default.toml`
/// 2. `{config_dir}/{USERBASE_ENVIRONMENT}.toml`
/// 3. `{config_dir}/local.toml` (not committed to version control)
/// 4. `USERBASE__*` environment variables (`__` separates sections)
/// 5. `DATABASE_URL`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    vars: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Creates a loader reading files from `config_dir` and the process environment.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            vars: None,
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Replaces the process environment with a fixed set of variables.
    #[must_use]
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = Some(vars);
        self
    }

    /// Builds and validates the configuration.
    pub fn load(&self) -> UserbaseResult<AppConfig> {
        if self.vars.is_none() {
            if let Err(e) = dotenvy::dotenv() {
                debug!("No .env file found or error loading it: {}", e);
            }
        }

        let environment = self
            .var(ENVIRONMENT_VAR)
            .unwrap_or_else(|| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(self.vars.clone()),
        );

        if let Some(url) = self.var(DATABASE_URL_VAR) {
            builder = builder
                .set_override("database.url", url)
                .map_err(config_error)?;
        }

        let mut app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error)?;
        app_config.app.environment = environment;

        validate_config(&app_config)?;
        Ok(app_config)
    }

    fn var(&self, key: &str) -> Option<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };
        value.filter(|value| !value.is_empty())
    }
}

/// Validates the configuration.
fn validate_config(config: &AppConfig) -> UserbaseResult<()> {
    if config.database.url.trim().is_empty() {
        return Err(UserbaseError::Configuration(format!(
            "{DATABASE_URL_VAR} is required"
        )));
    }

    if config.database.max_connections < config.database.min_connections {
        return Err(UserbaseError::Configuration(format!(
            "database.max_connections ({}) is below database.min_connections ({})",
            config.database.max_connections, config.database.min_connections
        )));
    }

    Ok(())
}

fn config_error(err: ConfigError) -> UserbaseError {
    UserbaseError::Configuration(err.to_string())
}
