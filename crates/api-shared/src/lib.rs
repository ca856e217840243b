//! # API Shared
//!
//! Shared wire types and services for the dosha prediction API.
//!
//! Contains:
//! - Request/response bodies (`types` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; kept free of transport code so other front ends can reuse the same
//! payloads.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
