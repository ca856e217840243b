use super::{argmax, ngrams, tokenize};
use crate::{DoshaError, DoshaResult};
use std::collections::HashMap;

/// Bag-of-words linear text classifier.
///
/// Each input is turned into a sparse term-frequency vector over `vocabulary`, optionally
/// weighted by `idf` and L2 normalised, then scored as `coef[c] · x + intercept[c]` for every class
/// `c`. The highest score wins; ties go to the class listed first.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LinearTextModel {
    classes: Vec<String>,
    vocabulary: HashMap<String, usize>,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    #[serde(default = "default_ngram_max")]
    ngram_max: usize,
    #[serde(default = "default_normalize")]
    normalize: bool,
}

/// Longest n-gram an artifact may ask for.
pub const MAX_NGRAM: usize = 8;

fn default_ngram_max() -> usize {
    1
}

fn default_normalize() -> bool {
    true
}

impl LinearTextModel {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    pub(crate) fn validate(&self) -> DoshaResult<()> {
        if self.classes.is_empty() {
            return Err(DoshaError::InvalidModel(
                "linear model must declare at least one class".into(),
            ));
        }

        if self.ngram_max == 0 || self.ngram_max > MAX_NGRAM {
            return Err(DoshaError::InvalidModel(format!(
                "ngram_max must be between 1 and {MAX_NGRAM}, got {}",
                self.ngram_max
            )));
        }

        if self.coef.len() != self.classes.len() || self.intercept.len() != self.classes.len() {
            return Err(DoshaError::InvalidModel(format!(
                "expected one coef row and one intercept per class ({} classes, {} rows, {} intercepts)",
                self.classes.len(),
                self.coef.len(),
                self.intercept.len()
            )));
        }

        let n_features = self.n_features();
        if self.coef.iter().any(|row| row.len() != n_features) {
            return Err(DoshaError::InvalidModel(
                "coef rows must all have the same length".into(),
            ));
        }

        if let Some(idf) = &self.idf {
            if idf.len() != n_features {
                return Err(DoshaError::InvalidModel(format!(
                    "idf has {} entries but the model has {} features",
                    idf.len(),
                    n_features
                )));
            }
        }

        if let Some((term, idx)) = self.vocabulary.iter().find(|(_, idx)| **idx >= n_features) {
            return Err(DoshaError::InvalidModel(format!(
                "vocabulary term '{term}' maps to feature {idx}, beyond {n_features} features"
            )));
        }

        Ok(())
    }

    /// Builds the (sparse) feature vector for `text`.
    fn features(&self, text: &str) -> HashMap<usize, f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in ngrams(&tokenize(text), self.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        if let Some(idf) = &self.idf {
            for (idx, value) in counts.iter_mut() {
                *value *= idf[*idx];
            }
        }

        if self.normalize {
            let norm = counts.values().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                counts.values_mut().for_each(|v| *v /= norm);
            }
        }

        counts
    }

    /// Scores `text` against every class, in class order.
    pub fn decision_function(&self, text: &str) -> Vec<f64> {
        let x = self.features(text);
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| bias + x.iter().map(|(idx, v)| row[*idx] * v).sum::<f64>())
            .collect()
    }

    pub(crate) fn predict_one(&self, text: &str) -> String {
        let best = argmax(self.decision_function(text)).unwrap_or(0);
        self.classes[best].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(extra: &str) -> LinearTextModel {
        let json = format!(
            r#"{{
                "classes": ["vata", "pitta", "kapha"],
                "vocabulary": {{"dry": 0, "fatigue": 1, "burning": 2, "mucus": 3, "dry skin": 4}},
                "coef": [
                    [1.0, 1.0, 0.0, 0.0, 0.5],
                    [0.0, 0.0, 2.0, 0.0, 0.0],
                    [0.0, 0.0, 0.0, 2.0, 0.0]
                ],
                "intercept": [0.0, 0.1, 0.0]
                {extra}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_predicts_highest_scoring_class() {
        let m = model("");
        m.validate().unwrap();
        assert_eq!(m.predict_one("fatigue and dry skin"), "vata");
        assert_eq!(m.predict_one("Burning sensation"), "pitta");
        assert_eq!(m.predict_one("MUCUS in the chest"), "kapha");
    }

    #[test]
    fn test_unseen_text_falls_back_to_intercepts() {
        let m = model("");
        assert_eq!(m.predict_one(""), "pitta");
        assert_eq!(m.predict_one("completely unrelated words"), "pitta");
    }

    #[test]
    fn test_ties_resolve_to_first_class() {
        let tied: LinearTextModel = serde_json::from_str(
            r#"{
                "classes": ["kapha", "vata"],
                "vocabulary": {"cold": 0},
                "coef": [[1.0], [1.0]],
                "intercept": [0.0, 0.0]
            }"#,
        )
        .unwrap();
        assert_eq!(tied.predict_one("cold"), "kapha");
        assert_eq!(tied.predict_one(""), "kapha");
    }

    #[test]
    fn test_bigrams_are_used_when_enabled() {
        let unigram = model(r#", "normalize": false"#);
        let bigram = model(r#", "normalize": false, "ngram_max": 2"#);
        let a = unigram.decision_function("dry skin");
        let b = bigram.decision_function("dry skin");
        assert_eq!(a[0], 1.0);
        assert_eq!(b[0], 1.5);
    }

    #[test]
    fn test_idf_and_normalisation_are_applied() {
        let m = model(r#", "idf": [3.0, 4.0, 1.0, 1.0, 1.0]"#);
        let scores = m.decision_function("dry fatigue");
        // x = [3, 4] / 5
        assert!((scores[0] - (0.6 + 0.8)).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_mismatched_rows() {
        let m: LinearTextModel = serde_json::from_str(
            r#"{
                "classes": ["vata", "pitta"],
                "vocabulary": {"dry": 0},
                "coef": [[1.0]],
                "intercept": [0.0, 0.0]
            }"#,
        )
        .unwrap();
        let err = m.validate().expect_err("should reject missing coef row");
        assert!(matches!(err, DoshaError::InvalidModel(msg) if msg.contains("one coef row")));
    }

    #[test]
    fn test_validate_rejects_out_of_range_vocabulary() {
        let m: LinearTextModel = serde_json::from_str(
            r#"{
                "classes": ["vata"],
                "vocabulary": {"dry": 3},
                "coef": [[1.0]],
                "intercept": [0.0]
            }"#,
        )
        .unwrap();
        let err = m.validate().expect_err("should reject bad feature index");
        assert!(matches!(err, DoshaError::InvalidModel(msg) if msg.contains("'dry'")));
    }

    #[test]
    fn test_validate_rejects_idf_length_mismatch() {
        let m = model(r#", "idf": [1.0]"#);
        let err = m.validate().expect_err("should reject short idf");
        assert!(matches!(err, DoshaError::InvalidModel(msg) if msg.contains("idf")));
    }

    #[test]
    fn test_validate_rejects_empty_classes() {
        let m: LinearTextModel = serde_json::from_str(
            r#"{"classes": [], "vocabulary": {}, "coef": [], "intercept": []}"#,
        )
        .unwrap();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_ngram_max() {
        let m = model(r#", "ngram_max": 1099511627776"#);
        let err = m.validate().expect_err("ngram_max is far too large");
        assert!(matches!(err, DoshaError::InvalidModel(msg) if msg.contains("ngram_max")));

        let zero = model(r#", "ngram_max": 0"#);
        assert!(zero.validate().is_err());

        let max = model(&format!(r#", "ngram_max": {MAX_NGRAM}"#));
        max.validate().unwrap();
        assert_eq!(max.predict_one("dry skin and cold hands"), "vata");
    }
}
