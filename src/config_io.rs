//! Runtime configuration loading.
//!
//! Directory detection and layered resolution live here, separate from the
//! plain data types in `config.rs`. Resolution order, lowest to highest
//! precedence: built-in defaults, config file, `BREACHES_*` environment
//! variables, command-line flags. Only the final result is validated, so a
//! bad value in a lower layer can still be replaced by a higher one.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// File name of the config file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// File name of a project-local config in the working directory.
pub const LOCAL_CONFIG_FILENAME: &str = "breaches.json";

pub const ENV_DATABASE: &str = "BREACHES_DATABASE";
pub const ENV_DATA_FILE: &str = "BREACHES_DATA_FILE";
pub const ENV_PAGE_SIZE: &str = "BREACHES_PAGE_SIZE";

/// Directory paths used for configuration
///
/// Only `main` should build this from `dirs::*`; everything else receives it
/// by parameter so tests can point it at temp directories.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// e.g. `~/.config/breaches` on Linux
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Build from the platform's standard locations.
    pub fn from_system() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::IoError("could not determine config directory".into()))?
            .join("breaches");
        Ok(Self { config_dir })
    }

    /// Build with an explicit directory (tests).
    pub fn for_testing(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }
}

/// Values given as command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub database: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub page_size: Option<usize>,
}

impl CliOverrides {
    fn apply(&self, config: &mut Config) {
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(page_size) = self.page_size {
            config.view.page_size = page_size;
        }
    }
}

/// Loads the config file and applies environment and command-line overrides.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    dir_context: DirectoryContext,
    working_dir: PathBuf,
    explicit_path: Option<PathBuf>,
    overrides: CliOverrides,
}

impl ConfigResolver {
    pub fn new(dir_context: DirectoryContext, working_dir: PathBuf) -> Self {
        Self {
            dir_context,
            working_dir,
            explicit_path: None,
            overrides: CliOverrides::default(),
        }
    }

    /// Apply these flags after the environment.
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use this file instead of searching. It must exist.
    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Project-local config path (`{working_dir}/breaches.json`)
    pub fn local_config_path(&self) -> PathBuf {
        self.working_dir.join(LOCAL_CONFIG_FILENAME)
    }

    /// The config file that `resolve` would read, if any.
    ///
    /// Search order: explicit path, working directory, config directory.
    pub fn find_config_path(&self) -> Option<PathBuf> {
        if let Some(explicit) = &self.explicit_path {
            return Some(explicit.clone());
        }

        [self.local_config_path(), self.dir_context.config_path()]
            .into_iter()
            .find(|path| path.exists())
    }

    /// Resolve the effective configuration using the process environment.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        self.resolve_with_env(|key| std::env::var(key).ok())
    }

    /// Resolve with a custom environment lookup.
    pub fn resolve_with_env<F>(&self, env: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.find_config_path() {
            Some(path) => {
                let config = Config::load_from_file(&path)?;
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        };

        apply_env_overrides(&mut config, env)?;
        self.overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

/// Apply `BREACHES_*` overrides to `config`.
fn apply_env_overrides<F>(config: &mut Config, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(database) = env(ENV_DATABASE) {
        tracing::debug!("{} overrides database path", ENV_DATABASE);
        config.database = PathBuf::from(database);
    }

    if let Some(data_file) = env(ENV_DATA_FILE) {
        tracing::debug!("{} overrides data file", ENV_DATA_FILE);
        config.data_file = PathBuf::from(data_file);
    }

    if let Some(page_size) = env(ENV_PAGE_SIZE) {
        config.view.page_size = page_size.trim().parse().map_err(|_| {
            ConfigError::ValidationError(format!(
                "{ENV_PAGE_SIZE} must be a positive integer, got {page_size:?}"
            ))
        })?;
    }

    Ok(())
}
