//! The fixed set of dosha categories the classifier may predict.

use crate::{DoshaError, DoshaResult};
use std::fmt;
use std::str::FromStr;

/// One of the known dosha categories.
///
/// The textual form (`vata`, `pitta`, `kapha`, `vata-pitta`) is the label the classifier emits and
/// the value echoed back to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
    VataPitta,
}

impl Dosha {
    /// All known doshas, in table order.
    pub const ALL: [Dosha; 4] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha, Dosha::VataPitta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
            Dosha::VataPitta => "vata-pitta",
        }
    }

    /// Resolve a classifier label to a dosha.
    ///
    /// Labels are matched exactly; anything else is an [`DoshaError::UnknownPredictionLabel`].
    pub fn from_label(label: &str) -> DoshaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == label)
            .ok_or_else(|| DoshaError::UnknownPredictionLabel(label.to_string()))
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
