//! Cross-cutting rules.
//!
//! These apply after the level protocol regardless of which level was selected. Each rule is an
//! independent predicate paired with the considerations it appends; rules run in slice order.

use crate::assessment::{AssessmentInput, Comorbidity, PainStatus};
use crate::recommendation::Contribution;

/// A predicate and the considerations appended when it holds.
pub struct CrossCuttingRule {
    pub name: &'static str,
    pub applies: fn(&AssessmentInput) -> bool,
    pub considerations: &'static [&'static str],
}

impl CrossCuttingRule {
    pub fn evaluate(&self, input: &AssessmentInput) -> Contribution {
        if (self.applies)(input) {
            Contribution::considerations(self.considerations)
        } else {
            Contribution::default()
        }
    }
}

impl std::fmt::Debug for CrossCuttingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossCuttingRule")
            .field("name", &self.name)
            .field("considerations", &self.considerations)
            .finish()
    }
}

pub static CROSS_CUTTING_RULES: &[CrossCuttingRule] = &[
    CrossCuttingRule {
        name: "existing-pain",
        applies: |input| input.pain_status == Some(PainStatus::Existing),
        considerations: &[
            "Secondary TMR requires more extensive neurolysis",
            "Identify and resect neuromas back to healthy fascicles",
            "Consider adjunctive pain management (medications, therapy)",
            "Address all symptomatic nerves to avoid unmasking",
        ],
    },
    CrossCuttingRule {
        name: "diabetes",
        applies: |input| input.has_comorbidity(Comorbidity::Diabetes),
        considerations: &["Higher risk of wound complications, consider enhanced monitoring"],
    },
    CrossCuttingRule {
        name: "smoking",
        applies: |input| input.has_comorbidity(Comorbidity::Smoking),
        considerations: &[
            "Increased risk of wound complications and potentially diminished nerve regeneration",
        ],
    },
];

/// Evaluates every cross-cutting rule in order.
pub fn cross_cutting(input: &AssessmentInput) -> Contribution {
    CROSS_CUTTING_RULES
        .iter()
        .fold(Contribution::default(), |acc, rule| acc.then(rule.evaluate(input)))
}
