//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Request
//! handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_MODEL_PATH, DEFAULT_REST_ADDR};
use crate::{DoshaError, DoshaResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    model_path: PathBuf,
    rest_addr: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(model_path: PathBuf, rest_addr: String) -> DoshaResult<Self> {
        if model_path.as_os_str().is_empty() {
            return Err(DoshaError::InvalidInput("model_path cannot be empty".into()));
        }

        if rest_addr.trim().is_empty() {
            return Err(DoshaError::InvalidInput("rest_addr cannot be empty".into()));
        }

        Ok(Self {
            model_path,
            rest_addr,
        })
    }

    /// Build a configuration from raw, optional environment values.
    ///
    /// Missing or whitespace-only values fall back to the defaults in [`crate::constants`].
    pub fn from_env_values(
        model_path: Option<String>,
        rest_addr: Option<String>,
    ) -> DoshaResult<Self> {
        Self::new(
            model_path_from_env_value(model_path),
            non_blank(rest_addr).unwrap_or_else(|| DEFAULT_REST_ADDR.into()),
        )
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }
}

/// Parse the model artifact path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MODEL_PATH`].
pub fn model_path_from_env_value(value: Option<String>) -> PathBuf {
    non_blank(value)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
