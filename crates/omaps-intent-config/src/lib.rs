//! Layered configuration for the `omaps-intent` tooling.
//!
//! Values resolve from built-in defaults, then an optional TOML file, then
//! `OMAPS_INTENT_*` environment variables, then command-line flags.

mod defaults;
mod logging;

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::defaults::{
    DEFAULT_LOG_FILTER, IMPORT_DIR_COMPONENTS, default_import_dir, default_log_filter,
    default_log_filter_string, default_log_format,
};
pub use self::logging::LogFormat;

/// Resolved configuration shared by the library consumers and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, OrthoConfig)]
#[ortho_config(
    prefix = "OMAPS_INTENT",
    discovery(
        app_name = "omaps-intent",
        env_var = "OMAPS_INTENT_CONFIG_PATH",
        config_file_name = "omaps-intent.toml",
        dotfile_name = ".omaps-intent.toml",
        config_cli_long = "config-path",
        config_cli_visible = true,
    )
)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` expression.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Scratch directory handed to the bookmark importer.
    #[serde(default = "default_import_dir")]
    #[ortho_config(default = default_import_dir())]
    pub import_dir: Utf8PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            import_dir: default_import_dir(),
        }
    }
}

impl Config {
    /// Returns the log filter expression.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the import scratch directory.
    #[must_use]
    pub fn import_dir(&self) -> &Utf8Path {
        self.import_dir.as_path()
    }

    /// Creates the import scratch directory and its parents.
    ///
    /// # Errors
    ///
    /// Returns [`ImportDirError`] when the directory cannot be created.
    pub fn prepare_import_dir(&self) -> Result<&Utf8Path, ImportDirError> {
        fs::create_dir_all(&self.import_dir).map_err(|source| ImportDirError {
            path: self.import_dir.clone(),
            source,
        })?;
        Ok(self.import_dir())
    }
}

/// Failure to prepare the import scratch directory.
#[derive(Debug, Error)]
#[error("failed to prepare import directory '{path}': {source}")]
pub struct ImportDirError {
    /// Directory that could not be created.
    pub path: Utf8PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: io::Error,
}
