//! Recommendation output and the contributions it is assembled from.

use serde::{Deserialize, Serialize};

/// Structured surgical recommendation produced by the engine.
///
/// Every list keeps the order in which rules appended to it. Nothing is sorted or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub surgical_approach: String,

    /// Nerve stumps to reroute, in anatomical priority order.
    pub donor_nerves: Vec<String>,

    /// Motor branches to coapt onto, primary choice first.
    pub target_motor_nerves: Vec<String>,

    /// Level, subtype, shared, pain, then comorbidity entries.
    pub considerations: Vec<String>,

    /// Only populated when a myoelectric prosthesis is planned.
    pub preserve_functions: Vec<String>,

    pub alternative_options: Vec<String>,
}

/// Entries contributed by one rule group.
///
/// Contributions are plain values; the engine folds them together with [`Contribution::then`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contribution {
    pub surgical_approach: Option<&'static str>,
    pub donor_nerves: Vec<&'static str>,
    pub target_motor_nerves: Vec<&'static str>,
    pub considerations: Vec<&'static str>,
    pub preserve_functions: Vec<&'static str>,
    pub alternative_options: Vec<&'static str>,
}

impl Contribution {
    /// A contribution that only adds considerations.
    pub fn considerations(entries: &[&'static str]) -> Self {
        Self {
            considerations: entries.to_vec(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Appends `next` after `self`.
    ///
    /// A later approach replaces an earlier one; every list is concatenated.
    pub fn then(mut self, next: Contribution) -> Self {
        if next.surgical_approach.is_some() {
            self.surgical_approach = next.surgical_approach;
        }
        self.donor_nerves.extend(next.donor_nerves);
        self.target_motor_nerves.extend(next.target_motor_nerves);
        self.considerations.extend(next.considerations);
        self.preserve_functions.extend(next.preserve_functions);
        self.alternative_options.extend(next.alternative_options);
        self
    }

    /// Materialises an owned [`Recommendation`].
    pub fn into_recommendation(self) -> Recommendation {
        fn owned(entries: Vec<&'static str>) -> Vec<String> {
            entries.into_iter().map(str::to_owned).collect()
        }

        Recommendation {
            surgical_approach: self.surgical_approach.unwrap_or_default().to_owned(),
            donor_nerves: owned(self.donor_nerves),
            target_motor_nerves: owned(self.target_motor_nerves),
            considerations: owned(self.considerations),
            preserve_functions: owned(self.preserve_functions),
            alternative_options: owned(self.alternative_options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn then_concatenates_in_order_without_deduplication() {
        let first = Contribution {
            surgical_approach: Some("approach"),
            considerations: vec!["a", "b"],
            ..Contribution::default()
        };
        let second = Contribution::considerations(&["b", "c"]);

        let combined = first.then(second);
        assert_eq!(combined.surgical_approach, Some("approach"));
        assert_eq!(combined.considerations, vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn empty_contribution_changes_nothing() {
        let base = Contribution {
            surgical_approach: Some("approach"),
            donor_nerves: vec!["donor"],
            ..Contribution::default()
        };
        assert!(Contribution::default().is_empty());
        assert_eq!(base.clone().then(Contribution::default()), base);
    }

    #[test]
    fn into_recommendation_copies_every_list() {
        let recommendation = Contribution {
            surgical_approach: Some("approach"),
            donor_nerves: vec!["d"],
            target_motor_nerves: vec!["t1", "t2"],
            considerations: vec!["c"],
            preserve_functions: vec!["p"],
            alternative_options: vec!["a"],
        }
        .into_recommendation();

        assert_eq!(recommendation.surgical_approach, "approach");
        assert_eq!(recommendation.donor_nerves, vec!["d"]);
        assert_eq!(recommendation.target_motor_nerves, vec!["t1", "t2"]);
        assert_eq!(recommendation.considerations, vec!["c"]);
        assert_eq!(recommendation.preserve_functions, vec!["p"]);
        assert_eq!(recommendation.alternative_options, vec!["a"]);
    }
}
