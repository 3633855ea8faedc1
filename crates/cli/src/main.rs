use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tmr_core::reference::{
    NoteSection, ANATOMICAL_NOTES, MEP_TRANSECTION_NOTE, TECHNICAL_NOTES, TOOL_SUBTITLE,
    TOOL_TITLE,
};
use tmr_core::{
    headline, recommend, AmputationLevel, AmputationSubtype, AssessmentInput, AssessmentOption,
    Comorbidity, MotorEntryPoint, PainStatus, PlanRenderer, ProstheticNeeds, Recommendation, Tab,
    MOTOR_ENTRY_POINTS,
};

#[derive(Parser)]
#[command(name = "tmr")]
#[command(about = "TMR decision support for partial hand amputations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a surgical plan from an assessment
    Recommend {
        /// Amputation level (dip, pip, ray, transmetacarpal, carpometacarpal)
        #[arg(long)]
        level: Option<AmputationLevel>,
        /// Digit for ray amputations, or side for transmetacarpal amputations
        #[arg(long)]
        subtype: Option<AmputationSubtype>,
        /// Pain status (preventive, existing)
        #[arg(long)]
        pain: Option<PainStatus>,
        /// Whether a myoelectric prosthesis is planned (yes, no)
        #[arg(long)]
        prosthetic: Option<ProstheticNeeds>,
        /// Comorbidity (diabetes, smoking); may be repeated
        #[arg(long = "comorbidity")]
        comorbidities: Vec<Comorbidity>,
        /// Render a single tab (overview, nerves, technical, anatomical)
        #[arg(long)]
        tab: Option<Tab>,
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },
    /// Print the motor entry point table and surgical notes
    Reference {
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },
    /// List every selectable assessment value
    Options,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
    Yaml,
}

#[derive(Serialize)]
struct RecommendOutput<'a> {
    headline: String,
    complete: bool,
    assessment: &'a AssessmentInput,
    recommendation: Option<Recommendation>,
}

#[derive(Serialize)]
struct ReferenceOutput {
    title: &'static str,
    subtitle: &'static str,
    motor_entry_points: &'static [MotorEntryPoint],
    anatomical_notes: &'static [&'static str],
    technical_notes: &'static [NoteSection],
    mep_transection_note: &'static str,
}

fn assessment(
    level: Option<AmputationLevel>,
    subtype: Option<AmputationSubtype>,
    pain: Option<PainStatus>,
    prosthetic: Option<ProstheticNeeds>,
    comorbidities: Vec<Comorbidity>,
) -> AssessmentInput {
    comorbidities.into_iter().fold(
        AssessmentInput::new()
            .with_amputation_level(level)
            .with_subtype(subtype)
            .with_pain_status(pain)
            .with_prosthetic_needs(prosthetic),
        AssessmentInput::with_comorbidity,
    )
}

/// Serializes structured output. Markdown is rendered separately, so only YAML is special-cased.
fn print_serialized<T: Serialize>(
    value: &T,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Yaml => print!("{}", serde_yaml::to_string(value)?),
        Format::Json | Format::Markdown => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn print_options<T: AssessmentOption>(title: &str, options: &[T]) {
    println!("{title}:");
    for option in options {
        println!("  {:<16} {}", option.as_str(), option.label());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let renderer = PlanRenderer::new();

    match cli.command {
        Some(Commands::Recommend {
            level,
            subtype,
            pain,
            prosthetic,
            comorbidities,
            tab,
            format,
        }) => {
            if let (Some(level), Some(subtype)) = (level, subtype) {
                if subtype.level() != level {
                    eprintln!(
                        "Note: subtype '{subtype}' does not apply to {level} amputations and is ignored."
                    );
                }
            }

            let input = assessment(level, subtype, pain, prosthetic, comorbidities);
            let recommendation = recommend(&input);

            match (format, tab) {
                (Format::Markdown, Some(tab)) => {
                    print!("{}", renderer.render_tab(tab, &input, recommendation.as_ref()))
                }
                (Format::Markdown, None) => {
                    print!("{}", renderer.render_all(&input, recommendation.as_ref()))
                }
                (format, _) => print_serialized(
                    &RecommendOutput {
                        headline: headline(&input),
                        complete: recommendation.is_some(),
                        assessment: &input,
                        recommendation,
                    },
                    format,
                )?,
            }
        }
        Some(Commands::Reference { format }) => match format {
            Format::Markdown => {
                println!("# {TOOL_TITLE}\n\n{TOOL_SUBTITLE}\n");
                print!("{}", renderer.reference());
            }
            format => print_serialized(
                &ReferenceOutput {
                    title: TOOL_TITLE,
                    subtitle: TOOL_SUBTITLE,
                    motor_entry_points: &MOTOR_ENTRY_POINTS,
                    anatomical_notes: ANATOMICAL_NOTES,
                    technical_notes: &TECHNICAL_NOTES,
                    mep_transection_note: MEP_TRANSECTION_NOTE,
                },
                format,
            )?,
        },
        Some(Commands::Options) => {
            print_options("Amputation level", AmputationLevel::ALL);
            for level in AmputationLevel::ALL {
                if let Some(prompt) = level.subtype_prompt() {
                    print_options(&format!("{prompt} ({level})"), level.subtypes());
                }
            }
            print_options("Pain status", PainStatus::ALL);
            print_options("Prosthetic needs", ProstheticNeeds::ALL);
            print_options("Comorbidities", Comorbidity::ALL);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
