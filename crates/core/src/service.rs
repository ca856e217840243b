//! Prediction service: classifier call-through joined with the recommendation table.

use crate::classifier::Classifier;
use crate::config::CoreConfig;
use crate::recommendations::{self, Recommendation};
use crate::{loader, Dosha, DoshaError, DoshaResult};
use std::sync::Arc;

/// Result of classifying a single symptom description.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Prediction {
    pub input: String,
    pub predicted_dosha: Dosha,
    pub recommendations: &'static Recommendation,
}

/// Read-only handle over the loaded classifier.
///
/// Cloning is cheap; clones share the same classifier.
#[derive(Clone)]
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Loads the classifier artifact named by `cfg` and wraps it in a service.
    pub fn from_config(cfg: &CoreConfig) -> DoshaResult<Self> {
        let model = loader::load_model(cfg.model_path())?;
        Ok(Self::new(Arc::new(model)))
    }

    /// Classifies `symptoms` and attaches the recommendation for the predicted dosha.
    ///
    /// The input is forwarded unchanged; empty or unrelated text is left to the classifier.
    ///
    /// # Errors
    ///
    /// Returns [`DoshaError::Classifier`] if the classifier fails or produces no label, and
    /// [`DoshaError::UnknownPredictionLabel`] if the label has no recommendation entry.
    pub fn predict(&self, symptoms: &str) -> DoshaResult<Prediction> {
        let label = self
            .classifier
            .predict(&[symptoms])?
            .into_iter()
            .next()
            .ok_or_else(|| DoshaError::Classifier("classifier returned no label".into()))?;

        let (dosha, recommendation) = recommendations::lookup(&label)?;
        tracing::debug!("predicted {} for {} byte input", dosha, symptoms.len());

        Ok(Prediction {
            input: symptoms.to_string(),
            predicted_dosha: dosha,
            recommendations: recommendation,
        })
    }

    /// Labels the classifier can emit that have no recommendation entry.
    pub fn unknown_labels(&self) -> Vec<String> {
        self.classifier
            .labels()
            .into_iter()
            .filter(|label| Dosha::from_label(label).is_err())
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.classifier.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classifier double that always answers with the same labels.
    struct FixedClassifier(Vec<&'static str>);

    impl Classifier for FixedClassifier {
        fn predict(&self, inputs: &[&str]) -> DoshaResult<Vec<String>> {
            Ok(inputs
                .iter()
                .zip(self.0.iter().cycle())
                .map(|(_, label)| label.to_string())
                .collect())
        }

        fn labels(&self) -> Vec<String> {
            self.0.iter().map(|l| l.to_string()).collect()
        }
    }

    struct SilentClassifier;

    impl Classifier for SilentClassifier {
        fn predict(&self, _inputs: &[&str]) -> DoshaResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn labels(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn service(labels: Vec<&'static str>) -> PredictionService {
        PredictionService::new(Arc::new(FixedClassifier(labels)))
    }

    #[test]
    fn test_predict_joins_label_with_recommendation() {
        let prediction = service(vec!["vata"]).predict("fatigue and dry skin").unwrap();

        assert_eq!(prediction.input, "fatigue and dry skin");
        assert_eq!(prediction.predicted_dosha, Dosha::Vata);
        assert_eq!(prediction.recommendations.therapy, "basti");
        assert_eq!(prediction.recommendations.herbs, ["ashwagandha", "triphala"]);
        assert_eq!(
            prediction.recommendations.lifestyle,
            ["oil massage", "warm food", "rest"]
        );
    }

    #[test]
    fn test_predict_forwards_empty_input() {
        let prediction = service(vec!["kapha"]).predict("").unwrap();
        assert_eq!(prediction.input, "");
        assert_eq!(prediction.predicted_dosha, Dosha::Kapha);
    }

    #[test]
    fn test_predict_unknown_label_is_an_error() {
        let err = service(vec!["tridosha"])
            .predict("anything")
            .expect_err("label has no recommendation");
        assert!(matches!(err, DoshaError::UnknownPredictionLabel(label) if label == "tridosha"));
    }

    #[test]
    fn test_predict_without_output_is_an_error() {
        let svc = PredictionService::new(Arc::new(SilentClassifier));
        let err = svc.predict("anything").expect_err("no label produced");
        assert!(matches!(err, DoshaError::Classifier(_)));
    }

    #[test]
    fn test_unknown_labels_reports_only_missing_entries() {
        let svc = service(vec!["vata", "pitta-kapha", "kapha", "sama"]);
        assert_eq!(svc.unknown_labels(), vec!["pitta-kapha", "sama"]);
        assert!(service(vec!["vata", "pitta", "kapha", "vata-pitta"])
            .unknown_labels()
            .is_empty());
    }

    #[test]
    fn test_serialised_prediction_matches_wire_shape() {
        let prediction = service(vec!["vata"]).predict("fatigue and dry skin").unwrap();
        assert_eq!(
            serde_json::to_string(&prediction).unwrap(),
            r#"{"input":"fatigue and dry skin","predicted_dosha":"vata","recommendations":{"therapy":"basti","herbs":["ashwagandha","triphala"],"lifestyle":["oil massage","warm food","rest"]}}"#
        );
    }
}
