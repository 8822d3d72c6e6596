//! Gateway configuration loading from config.toml.
//!
//! All process-wide settings live in one [`AppConfig`] value constructed at
//! startup and passed to the store and gateway constructors. Nothing reads
//! configuration ambiently after that.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for the record gateway and the spreadsheet it writes to.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Identifier of the spreadsheet holding the registration rows.
    pub spreadsheet_id: String,
    /// Name of the sheet (tab) inside the spreadsheet.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Path to the service-account key file. May be omitted in favor of the
    /// `GOOGLE_APPLICATION_CREDENTIALS` environment variable.
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
    /// OAuth scope requested for the spreadsheet API.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_sheet_name() -> String {
    "Página2".to_string()
}

fn default_scope() -> String {
    "https://www.googleapis.com/auth/spreadsheets".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl AppConfig {
    /// Resolves the service-account key file path from the configuration or,
    /// failing that, from `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn resolve_credentials_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.credentials_path {
            return Ok(path.clone());
        }
        std::env::var("GOOGLE_APPLICATION_CREDENTIALS")
            .map(PathBuf::from)
            .map_err(|_| Error::Config {
                message: "credentials_path is not set and GOOGLE_APPLICATION_CREDENTIALS is unset"
                    .to_string(),
            })
    }
}

/// Loads the gateway configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("loading configuration from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path_ref:?}: {e}"),
    })
}
