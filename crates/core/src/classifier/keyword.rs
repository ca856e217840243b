use super::argmax;
use crate::{DoshaError, DoshaResult};

/// A class and the keywords that vote for it.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct KeywordClass {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Additive keyword-scoring classifier.
///
/// Every keyword that appears as a substring of the lowercased input adds `keyword_weight` to its
/// class. The best-scoring class wins (ties go to the class listed first). Inputs that match no
/// keyword at all are assigned `fallback`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct KeywordModel {
    classes: Vec<KeywordClass>,
    #[serde(default = "default_keyword_weight")]
    keyword_weight: u32,
    fallback: String,
}

fn default_keyword_weight() -> u32 {
    2
}

impl KeywordModel {
    pub fn classes(&self) -> &[KeywordClass] {
        &self.classes
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub(crate) fn validate(&self) -> DoshaResult<()> {
        if self.classes.is_empty() {
            return Err(DoshaError::InvalidModel(
                "keyword model must declare at least one class".into(),
            ));
        }

        if !self.classes.iter().any(|c| c.label == self.fallback) {
            return Err(DoshaError::InvalidModel(format!(
                "fallback label '{}' is not one of the model classes",
                self.fallback
            )));
        }

        if self
            .classes
            .iter()
            .flat_map(|c| &c.keywords)
            .any(|k| k.trim().is_empty())
        {
            return Err(DoshaError::InvalidModel("keywords cannot be empty".into()));
        }

        Ok(())
    }

    pub fn scores(&self, text: &str) -> Vec<u64> {
        let lowered = text.to_lowercase();
        self.classes
            .iter()
            .map(|class| {
                let hits = class
                    .keywords
                    .iter()
                    .filter(|k| lowered.contains(k.to_lowercase().as_str()))
                    .count() as u64;
                hits.saturating_mul(u64::from(self.keyword_weight))
            })
            .collect()
    }

    pub(crate) fn predict_one(&self, text: &str) -> String {
        let scores = self.scores(text);
        match argmax(scores.iter().copied()) {
            Some(idx) if scores[idx] > 0 => self.classes[idx].label.clone(),
            _ => self.fallback.clone(),
        }
    }
}
