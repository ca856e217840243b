//! Constants used throughout the dosha core crate.
//!
//! Paths, addresses and environment variable names live here so the binaries and the CLI agree
//! on them.

/// Default location of the classifier artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model/panchakarma_dosha_model.json";

/// Default address the REST server binds to when no explicit address is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Environment variable overriding the classifier artifact path.
pub const MODEL_PATH_ENV: &str = "DOSHA_MODEL_PATH";

/// Environment variable overriding the REST listen address.
pub const REST_ADDR_ENV: &str = "DOSHA_REST_ADDR";

/// Artifact schema version understood by the loader.
pub const MODEL_FORMAT_VERSION: u32 = 1;
