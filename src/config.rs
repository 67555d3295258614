//! Runtime configuration.
//!
//! [`Config::load`] layers, in order: the embedded defaults, an optional
//! TOML file (`~/.hungerhelp/config.toml` unless a path is given), and
//! `HUNGERHELP__SECTION__KEY` environment variables. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem.

use crate::envelope::Composer;
use crate::location::{Catalog, CatalogError, Locator};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_CONFIG: &str = r#"
[search]
default_radius_km = 20.0
max_results       = 5
max_suggestions   = 5

[server]
host = "127.0.0.1"
port = 8000

[catalog]
"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub default_radius_km: f64,
    pub max_results: usize,
    pub max_suggestions: usize,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `[catalog]` section. No path means the built-in dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load with the default file location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_path())
    }

    /// Load, reading `path` if it exists.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, env: config::Environment) -> Result<Self, ConfigError> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.search.default_radius_km;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "search.default_radius_km must be a non-negative number, got {}",
                radius
            )));
        }
        if self.search.max_results == 0 || self.search.max_suggestions == 0 {
            return Err(ConfigError::Invalid(
                "search.max_results and search.max_suggestions must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn composer(&self) -> Composer {
        Composer::new(self.search.max_results, self.search.max_suggestions)
    }

    /// Load the configured catalog (or the built-in one).
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog.path {
            Some(path) => Catalog::load_from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// A locator over `catalog` using the configured limits.
    pub fn locator(&self, catalog: Arc<Catalog>) -> Locator {
        Locator::new(catalog)
            .with_composer(self.composer())
            .with_default_radius(self.search.default_radius_km)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("HUNGERHELP").separator("__")
}

fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hungerhelp")
        .join("config.toml")
}
