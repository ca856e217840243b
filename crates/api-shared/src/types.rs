//! JSON bodies exchanged over the API.
//!
//! Field order is part of the contract: serialising the same value always yields the same bytes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub message: String,
}

/// Prediction request.
///
/// `symptoms` is required and must be a string; its content is not inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictReq {
    #[schema(example = "fatigue and dry skin")]
    pub symptoms: String,
}

/// Recommended therapy, herbs and lifestyle actions for a dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRes {
    pub therapy: String,
    pub herbs: Vec<String>,
    pub lifestyle: Vec<String>,
}

/// Prediction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictRes {
    pub input: String,
    #[schema(example = "vata")]
    pub predicted_dosha: String,
    pub recommendations: RecommendationRes,
}
