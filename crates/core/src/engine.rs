//! Recommendation engine.
//!
//! [`recommend`] is a pure function of the assessment: no I/O, no shared state, and a freshly
//! owned result on every call. Contributions are concatenated in this order:
//!
//! 1. level protocol (approach, donor and target nerves)
//! 2. subtype entries (ray digits, transmetacarpal sides)
//! 3. level considerations and alternatives
//! 4. prosthetic preservation
//! 5. cross-cutting rules (existing pain, diabetes, smoking)

use crate::assessment::{AssessmentInput, AssessmentOption};
use crate::protocol::subtype_contribution;
use crate::recommendation::Recommendation;
use crate::rules::cross_cutting;

/// Builds a recommendation, or `None` while the amputation level is unset.
///
/// `None` means "assessment incomplete", not a failure. Unknown or mismatched refinements simply
/// contribute nothing.
pub fn recommend(input: &AssessmentInput) -> Option<Recommendation> {
    let level = input.amputation_level?;
    let protocol = level.protocol();

    let recommendation = protocol
        .base()
        .then(subtype_contribution(level, input.specific_amputation_type))
        .then(protocol.shared())
        .then(protocol.prosthetic(input.prosthetic_needs))
        .then(cross_cutting(input))
        .into_recommendation();

    Some(recommendation)
}

/// Recommendation operations for the API layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationService;

impl RecommendationService {
    /// Creates a new instance of RecommendationService.
    pub fn new() -> Self {
        Self
    }

    /// Runs the engine and records the outcome at debug level.
    pub fn recommend(&self, input: &AssessmentInput) -> Option<Recommendation> {
        let recommendation = recommend(input);
        match (&recommendation, input.amputation_level) {
            (Some(rec), Some(level)) => tracing::debug!(
                level = level.as_str(),
                subtype = input.specific_amputation_type.map(|s| s.as_str()),
                considerations = rec.considerations.len(),
                "recommendation generated"
            ),
            _ => tracing::debug!("assessment incomplete: amputation level unset"),
        }
        recommendation
    }
}
