//! Static therapy, herb and lifestyle guidance for each dosha.
//!
//! The table is process-wide constant data. Lookup is an exhaustive match on [`Dosha`], so a new
//! dosha cannot be added without also adding its recommendation.

use crate::Dosha;

/// Recommended therapy, herbs and lifestyle actions for a single dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Recommendation {
    pub therapy: &'static str,
    pub herbs: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
}

const VATA: Recommendation = Recommendation {
    therapy: "basti",
    herbs: &["ashwagandha", "triphala"],
    lifestyle: &["oil massage", "warm food", "rest"],
};

const PITTA: Recommendation = Recommendation {
    therapy: "virechana",
    herbs: &["turmeric", "pippali"],
    lifestyle: &["cooling diet", "hydration", "avoid spicy food"],
};

const KAPHA: Recommendation = Recommendation {
    therapy: "nasya",
    herbs: &["ginger", "trikatu"],
    lifestyle: &["exercise", "steam inhalation", "light diet"],
};

const VATA_PITTA: Recommendation = Recommendation {
    therapy: "shirodhara",
    herbs: &["brahmi"],
    lifestyle: &["yoga", "meditation", "good sleep"],
};

/// Returns the recommendation entry for `dosha`.
pub fn recommendation_for(dosha: Dosha) -> &'static Recommendation {
    match dosha {
        Dosha::Vata => &VATA,
        Dosha::Pitta => &PITTA,
        Dosha::Kapha => &KAPHA,
        Dosha::VataPitta => &VATA_PITTA,
    }
}

/// Looks up a recommendation by raw classifier label.
///
/// # Errors
///
/// Returns [`crate::DoshaError::UnknownPredictionLabel`] if `label` is not a known dosha.
pub fn lookup(label: &str) -> crate::DoshaResult<(Dosha, &'static Recommendation)> {
    let dosha = Dosha::from_label(label)?;
    Ok((dosha, recommendation_for(dosha)))
}
