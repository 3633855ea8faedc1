//! # TMR Core
//!
//! Core decision logic for Targeted Muscle Reinnervation (TMR) planning in partial hand
//! amputations.
//!
//! This crate contains:
//! - The assessment model (amputation level, subtype, pain status, prosthetic needs,
//!   comorbidities)
//! - The recommendation engine: a pure mapping from an assessment to a structured surgical plan
//! - Static anatomical and technical reference material
//! - Markdown rendering of plans for text front ends
//!
//! **No API concerns**: authentication, HTTP/gRPC servers and wire types belong in `api-grpc`,
//! `api-rest` or `api-shared`.

pub mod assessment;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod recommendation;
pub mod reference;
pub mod render;
pub mod rules;

pub use assessment::{
    parse_lenient, AmputationLevel, AmputationSubtype, AssessmentInput, AssessmentOption,
    Comorbidity, PainStatus, ProstheticNeeds,
};
pub use engine::{recommend, RecommendationService};
pub use error::{CoreError, CoreResult};
pub use recommendation::{Contribution, Recommendation};
pub use reference::{MotorEntryPoint, NoteSection, MOTOR_ENTRY_POINTS};
pub use render::{headline, PlanRenderer, Tab};
