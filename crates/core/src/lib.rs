//! # Dosha Core
//!
//! Core logic for the dosha prediction service.
//!
//! This crate contains everything that does not depend on a transport:
//! - Loading the classifier artifact from disk
//! - The [`Classifier`] trait and the supported text model families
//! - The fixed [`Dosha`] set and its recommendation table
//! - [`PredictionService`], which joins a classifier label with its recommendation
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod dosha;
pub mod error;
pub mod loader;
pub mod recommendations;
pub mod service;

pub use classifier::{Classifier, TextModel};
pub use config::CoreConfig;
pub use constants::*;
pub use dosha::Dosha;
pub use error::{DoshaError, DoshaResult};
pub use recommendations::{recommendation_for, Recommendation};
pub use service::{Prediction, PredictionService};
