//! Level and subtype protocols.
//!
//! Each amputation level has one static [`LevelProtocol`]. The ray and transmetacarpal levels are
//! further refined by a subtype, whose entries are slotted between the level's own entries and its
//! shared considerations.

use crate::assessment::{AmputationLevel, AmputationSubtype, ProstheticNeeds};
use crate::recommendation::Contribution;

/// Fixed content for one amputation level.
#[derive(Debug)]
pub struct LevelProtocol {
    pub surgical_approach: &'static str,
    pub donor_nerves: &'static [&'static str],
    pub target_motor_nerves: &'static [&'static str],
    /// Appended after any subtype-specific considerations.
    pub level_considerations: &'static [&'static str],
    /// Appended only when a myoelectric prosthesis is planned.
    pub preserve_functions: &'static [&'static str],
    pub alternative_options: &'static [&'static str],
}

pub static DIP: LevelProtocol = LevelProtocol {
    surgical_approach: "Volar incision extending into palm for proper exposure",
    donor_nerves: &["Proper digital nerve(s)"],
    target_motor_nerves: &[
        "Lumbrical motor branch (primary choice)",
        "Adjacent volar interosseous motor branch (secondary choice)",
    ],
    level_considerations: &[
        "Limited space and small nerve diameter (0.5-0.8mm)",
        "Consider RPNI if motor targets are limited",
        "May not require TMR if nerve retraction is adequate",
        "Higher success rate with TMR than neurectomy (82% vs 60%)",
    ],
    preserve_functions: &[],
    alternative_options: &[
        "RPNI - When no suitable motor targets exist",
        "Standard neuroma burial - Only if TMR or RPNI not feasible",
    ],
};

pub static PIP: LevelProtocol = LevelProtocol {
    surgical_approach: "Extended volar approach with carpal tunnel-type incision",
    donor_nerves: &[
        "Proper digital nerve(s)",
        "Common digital nerve branches if needed",
    ],
    target_motor_nerves: &[
        "Lumbrical motor nerve (primary choice)",
        "Volar interosseous motor branch (secondary choice)",
        "For radial/ulnar proper digital nerves, consider adjacent lumbrical",
    ],
    level_considerations: &[
        "MEPs for palmar interossei found in central third of metacarpal",
        "Digital nerves typically 1-3mm while target motor nerves average 0.85-0.97mm",
        "Nerve length between MEP and DBUN: 6.5mm (1st PI) to 10.5mm (2nd PI)",
        "Consider separate dorsal approach if using DI motor branches",
    ],
    preserve_functions: &[],
    alternative_options: &[],
};

pub static RAY: LevelProtocol = LevelProtocol {
    surgical_approach: "Extended volar approach with extended carpal tunnel incision",
    donor_nerves: &[],
    target_motor_nerves: &[],
    level_considerations: &[
        "Perform neurorrhaphy close to motor entry point (MEP) to minimize reinnervation time",
        "Protect neurorrhaphy site with local muscle cuff",
        "Expect size mismatch between proper digital nerve and motor branch",
    ],
    preserve_functions: &[
        "Preserve 2nd dorsal interosseous for 'hand open' myoelectric signal",
        "Preserve hypothenar muscles for 'hand close' myoelectric signal",
    ],
    alternative_options: &[],
};

pub static TRANSMETACARPAL: LevelProtocol = LevelProtocol {
    surgical_approach: "Combined volar and dorsal approaches may be necessary",
    donor_nerves: &[
        "Common digital nerves",
        "Radial sensory nerve if involved",
        "Proper digital nerves",
    ],
    target_motor_nerves: &[
        "Volar/dorsal interossei motor nerves",
        "Lumbrical motor nerves",
        "Anterior interosseous nerve to pronator quadratus",
    ],
    level_considerations: &[
        "Consider both volar and dorsal interossei as targets",
        "Deep motor branch of ulnar nerve may provide multiple target options",
        "MEPs for palmar interossei found in central third of metacarpal",
    ],
    preserve_functions: &[
        "Preserve key muscle groups for myoelectric signaling",
        "Consider future prosthetic interface locations when choosing nerve transfer sites",
    ],
    alternative_options: &[],
};

pub static CARPOMETACARPAL: LevelProtocol = LevelProtocol {
    surgical_approach: "Combined volar (carpal tunnel) and dorsal wrist approaches",
    donor_nerves: &[
        "Median nerve",
        "Ulnar nerve",
        "Superficial radial nerve",
        "Posterior interosseous nerve",
    ],
    target_motor_nerves: &[
        "Pronator quadratus (AIN)",
        "Wrist flexors (FCR, FCU)",
        "Extensor digitorum communis branches",
        "Remaining thenar muscles if available",
    ],
    level_considerations: &[
        "Consider TMR and RPNI combination when nerve caliber mismatch is significant",
        "More proximal nerve transfers provide better size match",
        "Address all major sensory and mixed nerves to avoid unmasking",
        "Consider preserving some muscle groups for myoelectric control",
    ],
    preserve_functions: &[
        "Preserve pronator teres if possible for future myoelectric signal",
        "Consider preserving wrist extensors/flexors for separate control channels",
    ],
    alternative_options: &[],
};

impl AmputationLevel {
    /// The static protocol for this level.
    pub fn protocol(self) -> &'static LevelProtocol {
        match self {
            AmputationLevel::Dip => &DIP,
            AmputationLevel::Pip => &PIP,
            AmputationLevel::Ray => &RAY,
            AmputationLevel::Transmetacarpal => &TRANSMETACARPAL,
            AmputationLevel::Carpometacarpal => &CARPOMETACARPAL,
        }
    }
}

impl LevelProtocol {
    /// Approach plus the level's own donor and target nerves.
    pub fn base(&self) -> Contribution {
        Contribution {
            surgical_approach: Some(self.surgical_approach),
            donor_nerves: self.donor_nerves.to_vec(),
            target_motor_nerves: self.target_motor_nerves.to_vec(),
            ..Contribution::default()
        }
    }

    pub fn shared(&self) -> Contribution {
        Contribution {
            considerations: self.level_considerations.to_vec(),
            alternative_options: self.alternative_options.to_vec(),
            ..Contribution::default()
        }
    }

    pub fn prosthetic(&self, needs: Option<ProstheticNeeds>) -> Contribution {
        match needs {
            Some(ProstheticNeeds::Yes) => Contribution {
                preserve_functions: self.preserve_functions.to_vec(),
                ..Contribution::default()
            },
            Some(ProstheticNeeds::No) | None => Contribution::default(),
        }
    }
}

/// Digit- or side-specific entries.
///
/// A subtype that does not refine `level` (or no subtype at all) contributes nothing.
pub fn subtype_contribution(
    level: AmputationLevel,
    subtype: Option<AmputationSubtype>,
) -> Contribution {
    use AmputationLevel::{Ray, Transmetacarpal};
    use AmputationSubtype::*;

    let Some(subtype) = subtype else {
        return Contribution::default();
    };

    match (level, subtype) {
        (Ray, Thumb) => Contribution {
            donor_nerves: vec!["Proper digital nerves of the thumb"],
            target_motor_nerves: vec![
                "Adductor pollicis motor nerve",
                "Flexor pollicis brevis motor nerve",
            ],
            considerations: vec![
                "Consider preservation of thenar function if partial thumb remains",
            ],
            ..Contribution::default()
        },
        (Ray, Index) => Contribution {
            donor_nerves: vec!["Proper digital nerves of the index finger"],
            target_motor_nerves: vec![
                "1st lumbrical motor nerve",
                "1st dorsal interosseous motor nerve",
            ],
            considerations: vec!["Access to 1st dorsal interosseous may require dorsal approach"],
            ..Contribution::default()
        },
        (Ray, Middle) => Contribution {
            donor_nerves: vec!["Proper digital nerves of the middle finger"],
            target_motor_nerves: vec![
                "2nd lumbrical motor nerve",
                "2nd volar interosseous motor nerve",
            ],
            ..Contribution::default()
        },
        (Ray, Ring) => Contribution {
            donor_nerves: vec!["Proper digital nerves of the ring finger"],
            target_motor_nerves: vec![
                "3rd lumbrical motor nerve",
                "3rd volar interosseous motor nerve",
            ],
            ..Contribution::default()
        },
        (Ray, Small) => Contribution {
            donor_nerves: vec!["Proper digital nerves of the small finger"],
            target_motor_nerves: vec!["4th lumbrical motor nerve", "Hypothenar motor branches"],
            ..Contribution::default()
        },
        (Transmetacarpal, Radial) => Contribution {
            target_motor_nerves: vec!["Ulnar innervated muscles (interossei 3/4)"],
            considerations: vec![
                "Transfer sensory nerve stumps to ulnar side (away from prosthetic docking)",
            ],
            ..Contribution::default()
        },
        (Transmetacarpal, Ulnar) => Contribution {
            target_motor_nerves: vec!["Median/radial innervated muscles (interossei 1/2)"],
            considerations: vec![
                "Transfer sensory nerve stumps to radial side (away from prosthetic docking)",
            ],
            ..Contribution::default()
        },
        (Transmetacarpal, Complete) => Contribution {
            target_motor_nerves: vec!["Any available intrinsic muscle targets"],
            ..Contribution::default()
        },
        _ => Contribution::default(),
    }
}
