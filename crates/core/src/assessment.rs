//! Assessment model.
//!
//! The five fields a clinician fills in before the engine can produce a plan. Every field is an
//! optional refinement except the amputation level, which is the only value the engine requires.
//!
//! Wire values are the lowercase strings used by the form (`"dip"`, `"thumb"`, `"existing"`...).
//! Two parsing modes are offered:
//! - strict [`std::str::FromStr`] parsing, which rejects unknown values with
//!   [`CoreError::UnknownValue`]
//! - lenient parsing ([`parse_lenient`], [`AssessmentInput::from_wire`]), which treats unknown or
//!   empty values as unset so that a bad refinement never blocks a recommendation

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A selectable value of one assessment field.
pub trait AssessmentOption: Copy + Sized + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;

    /// Every value, in form display order.
    const ALL: &'static [Self];

    /// Wire value.
    fn as_str(self) -> &'static str;

    /// Human-friendly label shown in the form.
    fn label(self) -> &'static str;
}

fn parse_option<T: AssessmentOption>(value: &str) -> CoreResult<T> {
    T::ALL
        .iter()
        .copied()
        .find(|option| option.as_str() == value)
        .ok_or_else(|| CoreError::UnknownValue {
            field: T::FIELD,
            value: value.to_string(),
        })
}

/// Parses a wire value, treating anything unrecognised (including `""`) as unset.
pub fn parse_lenient<T: AssessmentOption>(value: &str) -> Option<T> {
    parse_option(value).ok()
}

/// Level at which the hand was amputated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmputationLevel {
    /// Distal interphalangeal joint.
    Dip,
    /// Proximal interphalangeal joint.
    Pip,
    Ray,
    Transmetacarpal,
    Carpometacarpal,
}

impl AmputationLevel {
    /// Subtypes that refine this level. Empty for levels without a subtype choice.
    pub fn subtypes(self) -> &'static [AmputationSubtype] {
        match self {
            AmputationLevel::Ray => &[
                AmputationSubtype::Thumb,
                AmputationSubtype::Index,
                AmputationSubtype::Middle,
                AmputationSubtype::Ring,
                AmputationSubtype::Small,
            ],
            AmputationLevel::Transmetacarpal => &[
                AmputationSubtype::Radial,
                AmputationSubtype::Ulnar,
                AmputationSubtype::Complete,
            ],
            AmputationLevel::Dip | AmputationLevel::Pip | AmputationLevel::Carpometacarpal => &[],
        }
    }

    /// Form prompt for the subtype field, if this level has one.
    pub fn subtype_prompt(self) -> Option<&'static str> {
        match self {
            AmputationLevel::Ray => Some("Which Digit"),
            AmputationLevel::Transmetacarpal => Some("Specific Type"),
            _ => None,
        }
    }
}

impl AssessmentOption for AmputationLevel {
    const FIELD: &'static str = "amputation level";
    const ALL: &'static [Self] = &[
        AmputationLevel::Dip,
        AmputationLevel::Pip,
        AmputationLevel::Ray,
        AmputationLevel::Transmetacarpal,
        AmputationLevel::Carpometacarpal,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AmputationLevel::Dip => "dip",
            AmputationLevel::Pip => "pip",
            AmputationLevel::Ray => "ray",
            AmputationLevel::Transmetacarpal => "transmetacarpal",
            AmputationLevel::Carpometacarpal => "carpometacarpal",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AmputationLevel::Dip => "DIP Amputation",
            AmputationLevel::Pip => "PIP Amputation",
            AmputationLevel::Ray => "Ray Amputation",
            AmputationLevel::Transmetacarpal => "Transmetacarpal Amputation",
            AmputationLevel::Carpometacarpal => "Carpometacarpal Amputation",
        }
    }
}

/// Digit (ray) or side (transmetacarpal) refinement of the amputation level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmputationSubtype {
    Thumb,
    Index,
    Middle,
    Ring,
    Small,
    Radial,
    Ulnar,
    Complete,
}

impl AmputationSubtype {
    /// The level this subtype refines.
    pub fn level(self) -> AmputationLevel {
        match self {
            AmputationSubtype::Thumb
            | AmputationSubtype::Index
            | AmputationSubtype::Middle
            | AmputationSubtype::Ring
            | AmputationSubtype::Small => AmputationLevel::Ray,
            AmputationSubtype::Radial | AmputationSubtype::Ulnar | AmputationSubtype::Complete => {
                AmputationLevel::Transmetacarpal
            }
        }
    }
}

impl AssessmentOption for AmputationSubtype {
    const FIELD: &'static str = "specific amputation type";
    const ALL: &'static [Self] = &[
        AmputationSubtype::Thumb,
        AmputationSubtype::Index,
        AmputationSubtype::Middle,
        AmputationSubtype::Ring,
        AmputationSubtype::Small,
        AmputationSubtype::Radial,
        AmputationSubtype::Ulnar,
        AmputationSubtype::Complete,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AmputationSubtype::Thumb => "thumb",
            AmputationSubtype::Index => "index",
            AmputationSubtype::Middle => "middle",
            AmputationSubtype::Ring => "ring",
            AmputationSubtype::Small => "small",
            AmputationSubtype::Radial => "radial",
            AmputationSubtype::Ulnar => "ulnar",
            AmputationSubtype::Complete => "complete",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AmputationSubtype::Thumb => "Thumb",
            AmputationSubtype::Index => "Index",
            AmputationSubtype::Middle => "Middle",
            AmputationSubtype::Ring => "Ring",
            AmputationSubtype::Small => "Small",
            AmputationSubtype::Radial => "Radial-sided",
            AmputationSubtype::Ulnar => "Ulnar-sided",
            AmputationSubtype::Complete => "Complete Transmetacarpal",
        }
    }
}

/// Whether TMR is primary (preventive) or secondary (treating existing neuroma pain).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PainStatus {
    Preventive,
    Existing,
}

impl AssessmentOption for PainStatus {
    const FIELD: &'static str = "pain status";
    const ALL: &'static [Self] = &[PainStatus::Preventive, PainStatus::Existing];

    fn as_str(self) -> &'static str {
        match self {
            PainStatus::Preventive => "preventive",
            PainStatus::Existing => "existing",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PainStatus::Preventive => "Preventive (Primary TMR)",
            PainStatus::Existing => "Existing Neuroma Pain (Secondary TMR)",
        }
    }
}

/// Whether the patient will use a myoelectric prosthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProstheticNeeds {
    Yes,
    No,
}

impl AssessmentOption for ProstheticNeeds {
    const FIELD: &'static str = "prosthetic needs";
    const ALL: &'static [Self] = &[ProstheticNeeds::Yes, ProstheticNeeds::No];

    fn as_str(self) -> &'static str {
        match self {
            ProstheticNeeds::Yes => "yes",
            ProstheticNeeds::No => "no",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProstheticNeeds::Yes => "Will use myoelectric prosthesis",
            ProstheticNeeds::No => "No prosthesis planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comorbidity {
    Diabetes,
    Smoking,
}

impl AssessmentOption for Comorbidity {
    const FIELD: &'static str = "comorbidity";
    const ALL: &'static [Self] = &[Comorbidity::Diabetes, Comorbidity::Smoking];

    fn as_str(self) -> &'static str {
        match self {
            Comorbidity::Diabetes => "diabetes",
            Comorbidity::Smoking => "smoking",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Comorbidity::Diabetes => "Diabetes",
            Comorbidity::Smoking => "Smoking",
        }
    }
}

macro_rules! impl_option_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = CoreError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_option(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_option_traits!(
    AmputationLevel,
    AmputationSubtype,
    PainStatus,
    ProstheticNeeds,
    Comorbidity,
);

/// Clinician-supplied assessment.
///
/// Only `amputation_level` is required for a recommendation; the rest refine it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    #[serde(default)]
    pub amputation_level: Option<AmputationLevel>,

    /// Meaningful only under `ray` and `transmetacarpal`; ignored otherwise.
    #[serde(default)]
    pub specific_amputation_type: Option<AmputationSubtype>,

    #[serde(default)]
    pub pain_status: Option<PainStatus>,

    #[serde(default)]
    pub prosthetic_needs: Option<ProstheticNeeds>,

    #[serde(default)]
    pub comorbidities: BTreeSet<Comorbidity>,
}

impl AssessmentInput {
    /// Creates an empty assessment with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an assessment from raw wire strings.
    ///
    /// Unknown or empty values are treated as unset and unknown comorbidity tags are dropped.
    /// This never fails.
    pub fn from_wire<I, S>(
        amputation_level: &str,
        specific_amputation_type: &str,
        pain_status: &str,
        prosthetic_needs: &str,
        comorbidities: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            amputation_level: parse_lenient(amputation_level),
            specific_amputation_type: parse_lenient(specific_amputation_type),
            pain_status: parse_lenient(pain_status),
            prosthetic_needs: parse_lenient(prosthetic_needs),
            comorbidities: comorbidities
                .into_iter()
                .filter_map(|tag| parse_lenient(tag.as_ref()))
                .collect(),
        }
    }

    /// Sets the amputation level and clears the subtype, whose valid values depend on the level.
    pub fn with_amputation_level(mut self, level: Option<AmputationLevel>) -> Self {
        self.amputation_level = level;
        self.specific_amputation_type = None;
        self
    }

    pub fn with_subtype(mut self, subtype: Option<AmputationSubtype>) -> Self {
        self.specific_amputation_type = subtype;
        self
    }

    pub fn with_pain_status(mut self, pain_status: Option<PainStatus>) -> Self {
        self.pain_status = pain_status;
        self
    }

    pub fn with_prosthetic_needs(mut self, prosthetic_needs: Option<ProstheticNeeds>) -> Self {
        self.prosthetic_needs = prosthetic_needs;
        self
    }

    pub fn with_comorbidity(mut self, comorbidity: Comorbidity) -> Self {
        self.comorbidities.insert(comorbidity);
        self
    }

    pub fn has_comorbidity(&self, comorbidity: Comorbidity) -> bool {
        self.comorbidities.contains(&comorbidity)
    }

    /// The subtype, but only when it is one of the selected level's subtypes.
    pub fn subtype_for_level(&self) -> Option<AmputationSubtype> {
        let level = self.amputation_level?;
        self.specific_amputation_type
            .filter(|subtype| subtype.level() == level)
    }
}
