//! Text classifiers that map free-text symptoms to a label.
//!
//! The service only relies on the [`Classifier`] trait. Concrete models are deserialized from a
//! [`ModelArtifact`] by [`crate::loader`]; two model families are supported:
//!
//! - [`LinearTextModel`]: bag-of-words features (optionally TF-IDF weighted and L2 normalised)
//!   scored by a per-class linear function. This covers exported logistic regression and
//!   multinomial naive Bayes models.
//! - [`KeywordModel`]: additive keyword scoring with a fallback label.
//!
//! Both are immutable after load and safe to share across threads without locking.

mod keyword;
mod linear;
mod tokenize;

pub use keyword::{KeywordClass, KeywordModel};
pub use linear::{LinearTextModel, MAX_NGRAM};
pub use tokenize::{ngrams, tokenize};

use crate::DoshaResult;

/// A pre-trained text classifier.
pub trait Classifier: Send + Sync {
    /// Predicts one label per input, in input order.
    fn predict(&self, inputs: &[&str]) -> DoshaResult<Vec<String>>;

    /// The labels this classifier can emit.
    fn labels(&self) -> Vec<String>;
}

/// Serialized classifier artifact as stored on disk.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model: TextModel,
}

/// The model families an artifact may contain.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextModel {
    Linear(LinearTextModel),
    Keyword(KeywordModel),
}

impl TextModel {
    /// Checks that the model's internal shapes are consistent.
    pub fn validate(&self) -> DoshaResult<()> {
        match self {
            TextModel::Linear(m) => m.validate(),
            TextModel::Keyword(m) => m.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TextModel::Linear(_) => "linear",
            TextModel::Keyword(_) => "keyword",
        }
    }
}

impl Classifier for TextModel {
    fn predict(&self, inputs: &[&str]) -> DoshaResult<Vec<String>> {
        Ok(match self {
            TextModel::Linear(m) => inputs.iter().map(|text| m.predict_one(text)).collect(),
            TextModel::Keyword(m) => inputs.iter().map(|text| m.predict_one(text)).collect(),
        })
    }

    fn labels(&self) -> Vec<String> {
        match self {
            TextModel::Linear(m) => m.classes().to_vec(),
            TextModel::Keyword(m) => m.classes().iter().map(|c| c.label.clone()).collect(),
        }
    }
}

/// Returns the index of the highest score, preferring the earliest on ties.
pub(crate) fn argmax<T: PartialOrd + Copy>(scores: impl IntoIterator<Item = T>) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (idx, score) in scores.into_iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, current)) => score > current,
        };
        if replace {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}
