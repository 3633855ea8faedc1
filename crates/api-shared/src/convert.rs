//! Translation between `tmr-core` domain types and protobuf wire types.
//!
//! Both the gRPC and REST APIs answer with the same wire messages, so the mapping lives here.

use crate::pb;
use tmr_core::reference::{ANATOMICAL_NOTES, MEP_TRANSECTION_NOTE, TECHNICAL_NOTES};
use tmr_core::{
    headline, AmputationLevel, AmputationSubtype, AssessmentInput, AssessmentOption, Comorbidity,
    PainStatus, ProstheticNeeds, Recommendation, RecommendationService, MOTOR_ENTRY_POINTS,
};

/// Builds an assessment from raw request values.
///
/// Unrecognised values are treated as unset; they are logged at debug level and otherwise
/// ignored.
pub fn assessment_from_req(req: &pb::RecommendReq) -> AssessmentInput {
    let input = AssessmentInput::from_wire(
        &req.amputation_level,
        &req.specific_amputation_type,
        &req.pain_status,
        &req.prosthetic_needs,
        &req.comorbidities,
    );

    log_ignored("amputation_level", &req.amputation_level, input.amputation_level.is_some());
    log_ignored(
        "specific_amputation_type",
        &req.specific_amputation_type,
        input.specific_amputation_type.is_some(),
    );
    log_ignored("pain_status", &req.pain_status, input.pain_status.is_some());
    log_ignored("prosthetic_needs", &req.prosthetic_needs, input.prosthetic_needs.is_some());
    for tag in &req.comorbidities {
        log_ignored(
            "comorbidities",
            tag,
            tmr_core::parse_lenient::<Comorbidity>(tag).is_some(),
        );
    }

    input
}

fn log_ignored(field: &str, raw: &str, recognised: bool) {
    if !recognised && !raw.is_empty() {
        tracing::debug!(field, value = raw, "ignoring unrecognised assessment value");
    }
}

impl From<Recommendation> for pb::Recommendation {
    fn from(rec: Recommendation) -> Self {
        pb::Recommendation {
            surgical_approach: rec.surgical_approach,
            donor_nerves: rec.donor_nerves,
            target_motor_nerves: rec.target_motor_nerves,
            considerations: rec.considerations,
            preserve_functions: rec.preserve_functions,
            alternative_options: rec.alternative_options,
        }
    }
}

/// Runs the engine for a wire request and packages the answer.
pub fn recommend(service: &RecommendationService, req: &pb::RecommendReq) -> pb::RecommendRes {
    let input = assessment_from_req(req);
    let recommendation = service.recommend(&input);

    pb::RecommendRes {
        complete: recommendation.is_some(),
        headline: headline(&input),
        recommendation: recommendation.map(Into::into),
    }
}

/// Static reference material as a wire message.
pub fn reference_res() -> pb::ReferenceRes {
    pb::ReferenceRes {
        motor_entry_points: MOTOR_ENTRY_POINTS
            .iter()
            .map(|row| pb::MotorEntryPoint {
                muscle: row.muscle.to_string(),
                location: row.location.to_string(),
                diameter: row.diameter.to_string(),
                approach: row.approach.to_string(),
            })
            .collect(),
        anatomical_notes: ANATOMICAL_NOTES.iter().map(|n| n.to_string()).collect(),
        technical_notes: TECHNICAL_NOTES
            .iter()
            .map(|section| pb::NoteSection {
                title: section.title.to_string(),
                items: section.items.iter().map(|i| i.to_string()).collect(),
            })
            .collect(),
        mep_transection_note: MEP_TRANSECTION_NOTE.to_string(),
    }
}

fn select_options<T: AssessmentOption>(options: &[T]) -> Vec<pb::SelectOption> {
    options
        .iter()
        .map(|option| pb::SelectOption {
            value: option.as_str().to_string(),
            label: option.label().to_string(),
        })
        .collect()
}

/// Every selectable value of the assessment form, with display labels.
pub fn assessment_options_res() -> pb::AssessmentOptionsRes {
    pb::AssessmentOptionsRes {
        amputation_levels: select_options(AmputationLevel::ALL),
        subtypes: AmputationLevel::ALL
            .iter()
            .filter_map(|level| {
                let prompt = level.subtype_prompt()?;
                Some(pb::SubtypeOptions {
                    amputation_level: level.as_str().to_string(),
                    prompt: prompt.to_string(),
                    options: select_options::<AmputationSubtype>(level.subtypes()),
                })
            })
            .collect(),
        pain_statuses: select_options(PainStatus::ALL),
        prosthetic_needs: select_options(ProstheticNeeds::ALL),
        comorbidities: select_options(Comorbidity::ALL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(level: &str, subtype: &str, pain: &str, prosthetic: &str) -> pb::RecommendReq {
        pb::RecommendReq {
            amputation_level: level.into(),
            specific_amputation_type: subtype.into(),
            pain_status: pain.into(),
            prosthetic_needs: prosthetic.into(),
            comorbidities: Vec::new(),
        }
    }

    #[test]
    fn empty_request_is_incomplete() {
        let res = recommend(&RecommendationService::new(), &pb::RecommendReq::default());
        assert!(!res.complete);
        assert!(res.recommendation.is_none());
        assert_eq!(res.headline, "Complete the assessment to see recommendations");
    }

    #[test]
    fn transmetacarpal_radial_request() {
        let res = recommend(
            &RecommendationService::new(),
            &req("transmetacarpal", "radial", "", "yes"),
        );
        assert!(res.complete);
        assert_eq!(res.headline, "Recommendations for radial transmetacarpal amputation");

        let rec = res.recommendation.expect("recommendation");
        assert_eq!(rec.target_motor_nerves.len(), 4);
        assert_eq!(rec.preserve_functions.len(), 2);
    }

    #[test]
    fn unknown_values_are_ignored() {
        let mut request = req("carpometacarpal", "wrist", "acute", "unsure");
        request.comorbidities = vec!["smoking".into(), "asthma".into()];

        let input = assessment_from_req(&request);
        assert_eq!(input.amputation_level, Some(AmputationLevel::Carpometacarpal));
        assert_eq!(input.specific_amputation_type, None);
        assert_eq!(input.pain_status, None);
        assert_eq!(input.prosthetic_needs, None);
        assert_eq!(input.comorbidities.len(), 1);
    }

    #[test]
    fn recommendation_fields_map_one_to_one() {
        let rec = tmr_core::recommend(
            &AssessmentInput::new().with_amputation_level(Some(AmputationLevel::Dip)),
        )
        .expect("level set");
        let wire: pb::Recommendation = rec.clone().into();

        assert_eq!(wire.surgical_approach, rec.surgical_approach);
        assert_eq!(wire.donor_nerves, rec.donor_nerves);
        assert_eq!(wire.target_motor_nerves, rec.target_motor_nerves);
        assert_eq!(wire.considerations, rec.considerations);
        assert_eq!(wire.preserve_functions, rec.preserve_functions);
        assert_eq!(wire.alternative_options, rec.alternative_options);
    }

    #[test]
    fn reference_contains_full_table() {
        let res = reference_res();
        assert_eq!(res.motor_entry_points.len(), 10);
        assert_eq!(res.anatomical_notes.len(), 5);
        assert_eq!(res.technical_notes.len(), 3);
        assert!(!res.mep_transection_note.is_empty());
    }

    #[test]
    fn options_list_subtypes_for_ray_and_transmetacarpal_only() {
        let res = assessment_options_res();
        assert_eq!(res.amputation_levels.len(), 5);
        assert_eq!(res.amputation_levels[0].value, "dip");
        assert_eq!(res.amputation_levels[0].label, "DIP Amputation");

        let levels: Vec<&str> = res
            .subtypes
            .iter()
            .map(|s| s.amputation_level.as_str())
            .collect();
        assert_eq!(levels, vec!["ray", "transmetacarpal"]);
        assert_eq!(res.subtypes[0].prompt, "Which Digit");
        assert_eq!(res.subtypes[0].options.len(), 5);
        assert_eq!(res.subtypes[1].options[0].label, "Radial-sided");

        assert_eq!(res.pain_statuses.len(), 2);
        assert_eq!(res.prosthetic_needs.len(), 2);
        assert_eq!(res.comorbidities.len(), 2);
    }
}
