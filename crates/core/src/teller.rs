use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::{classify, ResponseShape};
use crate::domain::catalog::{
    ADMITS_ERROR_FORTUNE, CONFIDENCE_MAX, CONFIDENCE_MIN, EMPTY_FORTUNE, FORTUNES,
    NOT_JSON_CONFIDENCE, NOT_JSON_FORTUNE, NOT_JSON_RECOMMENDATION, OVERSIZED_FORTUNE,
    RECOMMENDATIONS,
};
use crate::domain::reading::Reading;

/// Turns an API response into a [`Reading`].
///
/// The random source is a type parameter so callers (and tests) decide
/// whether readings are reproducible.
#[derive(Debug)]
pub struct FortuneTeller<R> {
    rng: R,
}

impl FortuneTeller<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FortuneTeller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn analyze(&mut self, text: &str) -> Reading {
        self.analyze_at(text, Local::now())
    }

    pub fn analyze_at(&mut self, text: &str, now: DateTime<Local>) -> Reading {
        let shape = classify(text);
        tracing::debug!(?shape, bytes = text.len(), "classified response");

        let fortune = match shape {
            ResponseShape::Malformed => {
                return Reading {
                    fortune: NOT_JSON_FORTUNE,
                    confidence: NOT_JSON_CONFIDENCE,
                    timestamp: now,
                    recommendation: NOT_JSON_RECOMMENDATION,
                };
            }
            ResponseShape::AdmitsError => ADMITS_ERROR_FORTUNE,
            ResponseShape::Oversized => OVERSIZED_FORTUNE,
            ResponseShape::Empty => EMPTY_FORTUNE,
            ResponseShape::Ordinary => self.pick(&FORTUNES),
        };

        Reading {
            fortune,
            confidence: self.rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX),
            timestamp: now,
            recommendation: self.pick(&RECOMMENDATIONS),
        }
    }

    fn pick(&mut self, catalog: &[&'static str]) -> &'static str {
        catalog[self.rng.gen_range(0..catalog.len())]
    }
}
