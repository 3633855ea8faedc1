//! Static anatomical and technical reference material.
//!
//! Display-only data shown alongside a plan. None of it feeds into the engine.

use serde::Serialize;

pub const TOOL_TITLE: &str = "TMR Decision Algorithm for Hand Amputations";

pub const TOOL_SUBTITLE: &str = "An evidence-based clinical decision support tool for surgical planning of Targeted Muscle Reinnervation in partial hand amputations";

/// Shown beside the donor and target nerve lists.
pub const MEP_TRANSECTION_NOTE: &str = "Motor branches must be transected as close as possible to motor entry point (MEP) to minimize reinnervation time.";

/// Diameter value used when a nerve has not been measured.
pub const UNMEASURED_DIAMETER: &str = "-";

/// Motor entry point of one intrinsic hand muscle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MotorEntryPoint {
    pub muscle: &'static str,
    pub location: &'static str,
    /// Nerve diameter, or [`UNMEASURED_DIAMETER`].
    pub diameter: &'static str,
    pub approach: &'static str,
}

impl MotorEntryPoint {
    pub fn diameter_measured(&self) -> bool {
        self.diameter != UNMEASURED_DIAMETER
    }
}

pub static MOTOR_ENTRY_POINTS: [MotorEntryPoint; 10] = [
    MotorEntryPoint {
        muscle: "1st Palmar Interosseous",
        location: "40.0mm from MCP joint (index), 23.5mm radial from median nerve",
        diameter: "0.88mm",
        approach: "Volar (requires release of adductor pollicis)",
    },
    MotorEntryPoint {
        muscle: "2nd Palmar Interosseous",
        location: "32.2mm from MCP joint (ring), 23.3mm ulnar from median nerve",
        diameter: "0.97mm",
        approach: "Volar",
    },
    MotorEntryPoint {
        muscle: "3rd Palmar Interosseous",
        location: "32.4mm from MCP joint (little), 24.7mm ulnar from median nerve",
        diameter: "0.85mm",
        approach: "Volar",
    },
    MotorEntryPoint {
        muscle: "2nd Dorsal Interosseous",
        location: "31.9mm from CMC joint (middle)",
        diameter: UNMEASURED_DIAMETER,
        approach: "Dorsal",
    },
    MotorEntryPoint {
        muscle: "3rd Dorsal Interosseous",
        location: "28.9mm from CMC joint (middle)",
        diameter: UNMEASURED_DIAMETER,
        approach: "Dorsal",
    },
    MotorEntryPoint {
        muscle: "4th Dorsal Interosseous",
        location: "25.4mm from CMC joint (ring)",
        diameter: UNMEASURED_DIAMETER,
        approach: "Dorsal",
    },
    MotorEntryPoint {
        muscle: "Lumbrical 1",
        location: "Common digital nerve to index finger",
        diameter: "0.6-0.8mm",
        approach: "Volar",
    },
    MotorEntryPoint {
        muscle: "Lumbrical 2",
        location: "Common digital nerve to middle finger",
        diameter: "0.6-0.8mm",
        approach: "Volar",
    },
    MotorEntryPoint {
        muscle: "Lumbrical 3",
        location: "Common digital nerve to ring finger",
        diameter: "0.6-0.8mm",
        approach: "Volar",
    },
    MotorEntryPoint {
        muscle: "Lumbrical 4",
        location: "Common digital nerve to small finger",
        diameter: "0.6-0.8mm",
        approach: "Volar",
    },
];

pub static ANATOMICAL_NOTES: &[&str] = &[
    "MEPs for the Palmar Interossei found in central third of metacarpal",
    "First Palmar Interosseous covered by adductor pollicis (transverse head)",
    "Branches to Dorsal Interossei take direct routes into muscle - best approached dorsally",
    "Nerve length between MEP and DBUN: 6.5mm (1st PI) to 10.5mm (2nd PI)",
    "Digital nerve must be brought nearly to interosseous muscle MEP for neurorrhaphy",
];

/// A titled list of technical notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NoteSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub static TECHNICAL_NOTES: [NoteSection; 3] = [
    NoteSection {
        title: "Nerve Preparation",
        items: &[
            "Transect recipient target motor nerves proximally",
            "Transect the transferred nerve stumps distally with neurorrhaphies",
            "Perform hand-sewn interrupted epineurial technique using 8-0 nylon sutures",
            "Shorten distal target motor nerve stump as much as possible",
            "Maintain tension-free nerve coaptation",
        ],
    },
    NoteSection {
        title: "Size Mismatch Management",
        items: &[
            "Digital nerves typically 1-3mm in diameter",
            "Target motor nerves average 0.85-0.97mm in diameter",
            "Reinforce coaptation site with local denervated muscle cuff",
            "Secure muscle cuff with interrupted 4-0 Vicryl suture",
        ],
    },
    NoteSection {
        title: "Best Practices",
        items: &[
            "Avoid paralytic or local nerve blockade during procedure",
            "Use nerve stimulator (0.5-2mA, 50-100V) to identify target branches",
            "Perform neurorrhaphy near motor entry point for faster reinnervation",
            "Position joints under maximal stress during coaptation to ensure tension-free repair",
        ],
    },
];
