//! Markdown rendering of a plan.
//!
//! The plan is split into the same four tabs the form shows: overview, nerve selection,
//! technical notes and anatomical reference. Rendering is purely mechanical; every value comes
//! from the engine output or the static reference tables.
//!
//! When the engine returns no recommendation (amputation level unset) every tab renders the
//! "complete the assessment" placeholder instead.

use crate::assessment::{AssessmentInput, AssessmentOption};
use crate::error::{CoreError, CoreResult};
use crate::recommendation::Recommendation;
use crate::reference::{
    ANATOMICAL_NOTES, MEP_TRANSECTION_NOTE, MOTOR_ENTRY_POINTS, TECHNICAL_NOTES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INCOMPLETE_HEADLINE: &str = "Complete the assessment to see recommendations";
const PLACEHOLDER_PROMPT: &str =
    "Complete the assessment to generate personalized TMR recommendations";
const PLACEHOLDER_HINT: &str = "Include amputation level, specific type, and clinical factors";

/// A section of the rendered plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Overview,
    Nerves,
    Technical,
    Anatomical,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Nerves, Tab::Technical, Tab::Anatomical];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Nerves => "nerves",
            Tab::Technical => "technical",
            Tab::Anatomical => "anatomical",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Nerves => "Nerve Selection",
            Tab::Technical => "Technical Notes",
            Tab::Anatomical => "Anatomical Reference",
        }
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| CoreError::UnknownValue {
                field: "tab",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-line summary of what the plan covers, e.g. "Recommendations for thumb ray amputation".
pub fn headline(input: &AssessmentInput) -> String {
    match input.amputation_level {
        Some(level) => {
            let subtype = input
                .subtype_for_level()
                .map(|s| format!("{} ", s.as_str()))
                .unwrap_or_default();
            format!("Recommendations for {}{} amputation", subtype, level.as_str())
        }
        None => INCOMPLETE_HEADLINE.to_string(),
    }
}

/// Renders plans as Markdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanRenderer;

impl PlanRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a single tab.
    pub fn render_tab(
        &self,
        tab: Tab,
        input: &AssessmentInput,
        recommendation: Option<&Recommendation>,
    ) -> String {
        let Some(recommendation) = recommendation else {
            return self.placeholder();
        };

        match tab {
            Tab::Overview => self.overview(input, recommendation),
            Tab::Nerves => self.nerves(recommendation),
            Tab::Technical => self.technical(),
            Tab::Anatomical => self.anatomical(),
        }
    }

    /// Renders every tab in order, separated by horizontal rules.
    pub fn render_all(
        &self,
        input: &AssessmentInput,
        recommendation: Option<&Recommendation>,
    ) -> String {
        if recommendation.is_none() {
            return self.placeholder();
        }

        Tab::ALL
            .into_iter()
            .map(|tab| self.render_tab(tab, input, recommendation))
            .collect::<Vec<_>>()
            .join("\n---\n\n")
    }

    /// Renders the static technical and anatomical material, which needs no assessment.
    pub fn reference(&self) -> String {
        [self.technical(), self.anatomical()].join("\n---\n\n")
    }

    pub fn placeholder(&self) -> String {
        format!("## Surgical Recommendations\n\n{PLACEHOLDER_PROMPT}\n\n{PLACEHOLDER_HINT}\n")
    }

    fn overview(&self, input: &AssessmentInput, recommendation: &Recommendation) -> String {
        let mut output = String::new();
        output.push_str("## TMR Surgical Plan\n\n");
        output.push_str(&format!("{}\n\n", headline(input)));

        output.push_str("### Recommended Approach\n\n");
        output.push_str(&format!("{}\n\n", recommendation.surgical_approach));

        output.push_str("### Key Considerations\n\n");
        output.push_str(&bullet_list(&recommendation.considerations));

        if !recommendation.preserve_functions.is_empty() {
            output.push_str("### Functional Preservation Notes\n\n");
            output.push_str(&bullet_list(&recommendation.preserve_functions));
        }

        if !recommendation.alternative_options.is_empty() {
            output.push_str("### Alternative Options\n\n");
            output.push_str(&bullet_list(&recommendation.alternative_options));
        }

        output
    }

    fn nerves(&self, recommendation: &Recommendation) -> String {
        let mut output = String::new();
        output.push_str("## Nerve Transfer Recommendations\n\n");

        output.push_str("### Donor Nerves\n\n");
        output.push_str(&bullet_list(&recommendation.donor_nerves));

        output.push_str("### Target Motor Nerves\n\n");
        output.push_str(&bullet_list(&recommendation.target_motor_nerves));

        output.push_str(&format!(
            "> **Important Consideration:** {MEP_TRANSECTION_NOTE}\n"
        ));
        output
    }

    fn technical(&self) -> String {
        let mut output = String::new();
        output.push_str("## Technical Considerations\n\n");
        for section in &TECHNICAL_NOTES {
            output.push_str(&format!("### {}\n\n", section.title));
            output.push_str(&bullet_list(section.items));
        }
        output
    }

    fn anatomical(&self) -> String {
        let mut output = String::new();
        output.push_str("## Anatomical Reference\n\n");
        output.push_str(
            "| Target Muscle | Motor Entry Point Location | Nerve Diameter | Approach |\n",
        );
        output.push_str("|---|---|---|---|\n");
        for row in &MOTOR_ENTRY_POINTS {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.muscle, row.location, row.diameter, row.approach
            ));
        }
        output.push('\n');

        output.push_str("### Key Anatomical Notes\n\n");
        output.push_str(&bullet_list(ANATOMICAL_NOTES));
        output
    }
}

fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "_None_\n\n".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!("- {}\n", item.as_ref()));
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AmputationLevel, AmputationSubtype, ProstheticNeeds};
    use crate::engine::recommend;

    fn ray_thumb() -> AssessmentInput {
        AssessmentInput::new()
            .with_amputation_level(Some(AmputationLevel::Ray))
            .with_subtype(Some(AmputationSubtype::Thumb))
    }

    #[test]
    fn tab_parses_wire_values() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert!("summary".parse::<Tab>().is_err());
    }

    #[test]
    fn headline_includes_subtype_when_valid_for_level() {
        assert_eq!(headline(&ray_thumb()), "Recommendations for thumb ray amputation");

        let pip = AssessmentInput::new().with_amputation_level(Some(AmputationLevel::Pip));
        assert_eq!(headline(&pip), "Recommendations for pip amputation");

        let mismatched = pip.with_subtype(Some(AmputationSubtype::Thumb));
        assert_eq!(headline(&mismatched), "Recommendations for pip amputation");

        assert_eq!(headline(&AssessmentInput::new()), INCOMPLETE_HEADLINE);
    }

    #[test]
    fn incomplete_assessment_renders_placeholder_for_every_tab() {
        let renderer = PlanRenderer::new();
        let input = AssessmentInput::new();
        for tab in Tab::ALL {
            let output = renderer.render_tab(tab, &input, None);
            assert!(output.contains(PLACEHOLDER_PROMPT));
        }
        assert_eq!(renderer.render_all(&input, None), renderer.placeholder());
    }

    #[test]
    fn overview_lists_considerations_and_preservation() {
        let input = ray_thumb().with_prosthetic_needs(Some(ProstheticNeeds::Yes));
        let rec = recommend(&input).expect("level set");
        let output = PlanRenderer::new().render_tab(Tab::Overview, &input, Some(&rec));

        assert!(output.contains("Recommendations for thumb ray amputation"));
        assert!(output.contains(&format!("{}\n", rec.surgical_approach)));
        assert!(output.contains("- Protect neurorrhaphy site with local muscle cuff\n"));
        assert!(output.contains("### Functional Preservation Notes"));
        assert!(!output.contains("### Alternative Options"));
    }

    #[test]
    fn overview_shows_alternatives_for_dip() {
        let input = AssessmentInput::new().with_amputation_level(Some(AmputationLevel::Dip));
        let rec = recommend(&input).expect("level set");
        let output = PlanRenderer::new().render_tab(Tab::Overview, &input, Some(&rec));

        assert!(output.contains("### Alternative Options"));
        assert!(output.contains("- RPNI - When no suitable motor targets exist\n"));
        assert!(!output.contains("### Functional Preservation Notes"));
    }

    #[test]
    fn nerves_tab_marks_empty_lists() {
        let input = AssessmentInput::new().with_amputation_level(Some(AmputationLevel::Ray));
        let rec = recommend(&input).expect("level set");
        let output = PlanRenderer::new().render_tab(Tab::Nerves, &input, Some(&rec));

        assert!(output.contains("### Donor Nerves\n\n_None_"));
        assert!(output.contains(MEP_TRANSECTION_NOTE));
    }

    #[test]
    fn anatomical_tab_renders_full_table() {
        let input = ray_thumb();
        let rec = recommend(&input).expect("level set");
        let output = PlanRenderer::new().render_tab(Tab::Anatomical, &input, Some(&rec));

        let rows = output.lines().filter(|line| line.starts_with("| ")).count();
        assert_eq!(rows, 1 + MOTOR_ENTRY_POINTS.len());
        assert!(output.contains("| 2nd Dorsal Interosseous | 31.9mm from CMC joint (middle) | - | Dorsal |"));
    }

    #[test]
    fn render_all_contains_every_tab() {
        let input = ray_thumb();
        let rec = recommend(&input).expect("level set");
        let output = PlanRenderer::new().render_all(&input, Some(&rec));

        assert!(output.contains("## TMR Surgical Plan"));
        assert!(output.contains("## Nerve Transfer Recommendations"));
        assert!(output.contains("## Technical Considerations"));
        assert!(output.contains("## Anatomical Reference"));
        assert_eq!(output.matches("\n---\n").count(), 3);
    }

    #[test]
    fn reference_renders_without_assessment() {
        let output = PlanRenderer::new().reference();
        assert!(output.starts_with("## Technical Considerations"));
        assert!(output.contains("## Anatomical Reference"));
        assert!(!output.contains("Surgical Recommendations"));
    }
}
