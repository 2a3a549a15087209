//! The witness branch. Witness records live inside the injured worker's
//! case folder and are numbered 证人01, 证人02, … per injured worker; the
//! folders are authoritative, the index is never consulted or written.

use std::path::PathBuf;

use tracing::info;

use anjuan_core::casenum;
use anjuan_core::models::interview::InterviewForm;
use anjuan_core::naming;
use anjuan_render::template::TemplateKind;

use crate::context::SessionContext;
use crate::error::RouterError;
use crate::plan::{InterviewPlan, PlanStep};
use crate::scan::{self, WitnessDoc};

/// Outcome of locating the injured worker's case folder.
#[derive(Debug)]
pub enum WitnessResolution {
    /// No case folder for the injured worker this year. The proposed plan
    /// opens one and renders witness record 01; the operator confirms
    /// before anything is created.
    NoCaseFolder {
        injured: String,
        proposed: InterviewPlan,
    },
    /// The folder already holds a record for this same witness. The
    /// operator either reopens it or takes another statement.
    ExistingWitnessDoc {
        folder: PathBuf,
        existing: WitnessDoc,
        next: InterviewPlan,
    },
    /// No conflict; the plan renders the next sequence directly.
    Ready(InterviewPlan),
}

/// The operator's answer to a witness-branch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessChoice {
    OpenExisting,
    CreateNew,
    Cancel,
}

pub fn resolve_witness(
    ctx: &SessionContext,
    form: &InterviewForm,
) -> Result<WitnessResolution, RouterError> {
    let injured = form.injured_name();
    if injured.is_empty() {
        return Err(RouterError::MissingInjuredName);
    }
    let witness = form.name.trim();
    if witness.is_empty() {
        return Err(RouterError::MissingWitnessName);
    }

    let names = scan::year_folder_names(ctx)?;
    let folders = scan::person_case_folders(&names, injured);

    let Some(folder_name) = folders.last() else {
        info!(injured, "no case folder yet, proposing one");
        let proposed = first_witness_plan(ctx, form, injured, witness, &names);
        return Ok(WitnessResolution::NoCaseFolder {
            injured: injured.to_string(),
            proposed,
        });
    };

    // Several folders can exist for one person (repeat injuries); witness
    // statements attach to the most recent, which sorts last.
    let folder = ctx.year_dir().join(folder_name);
    let docs = scan::witness_documents(&folder, injured)?;
    let next_sequence = docs.iter().map(|doc| doc.sequence).max().map_or(1, |m| m + 1);
    let next = witness_plan(ctx, form, folder_name, &folder, injured, witness, next_sequence);

    match docs.into_iter().find(|doc| doc.witness == witness) {
        Some(existing) => {
            info!(injured, witness, existing = %existing.path.display(), "witness already on record");
            Ok(WitnessResolution::ExistingWitnessDoc {
                folder,
                existing,
                next,
            })
        }
        None => Ok(WitnessResolution::Ready(next)),
    }
}

/// Turn the operator's answer into a plan. `Ready` needs no answer;
/// declining a proposal abandons the session with no side effects.
pub fn decide_witness(
    resolution: WitnessResolution,
    choice: WitnessChoice,
) -> Option<InterviewPlan> {
    match resolution {
        WitnessResolution::Ready(plan) => Some(plan),
        WitnessResolution::NoCaseFolder { proposed, .. } => match choice {
            WitnessChoice::CreateNew => Some(proposed),
            _ => None,
        },
        WitnessResolution::ExistingWitnessDoc { existing, next, .. } => match choice {
            WitnessChoice::OpenExisting => Some(InterviewPlan {
                case_number: next.case_number,
                steps: vec![PlanStep::OpenDocument {
                    path: existing.path,
                }],
            }),
            WitnessChoice::CreateNew => Some(next),
            WitnessChoice::Cancel => None,
        },
    }
}

/// First statement for an injured worker with no folder: mint their case
/// number, create the folder, render 证人01. The index is not written;
/// the dossier is registered when the injured worker themself is
/// interviewed.
fn first_witness_plan(
    ctx: &SessionContext,
    form: &InterviewForm,
    injured: &str,
    witness: &str,
    year_folders: &[String],
) -> InterviewPlan {
    let case_number = casenum::generate(form.case_type(), injured, year_folders);
    let folder = ctx.year_dir().join(&case_number);
    let output = folder.join(naming::witness_document(injured, 1, witness));
    let fields = ctx.field_map(form, &case_number);

    InterviewPlan {
        case_number: case_number.clone(),
        steps: vec![
            PlanStep::CreateCaseFolder { path: folder },
            PlanStep::RenderDocument {
                kind: TemplateKind::Witness,
                output: output.clone(),
                fields,
            },
            PlanStep::OpenDocument { path: output },
        ],
    }
}

fn witness_plan(
    ctx: &SessionContext,
    form: &InterviewForm,
    case_number: &str,
    folder: &std::path::Path,
    injured: &str,
    witness: &str,
    sequence: u32,
) -> InterviewPlan {
    let output = folder.join(naming::witness_document(injured, sequence, witness));
    let fields = ctx.field_map(form, case_number);

    InterviewPlan {
        case_number: case_number.to_string(),
        steps: vec![
            PlanStep::RenderDocument {
                kind: TemplateKind::Witness,
                output: output.clone(),
                fields,
            },
            PlanStep::OpenDocument { path: output },
        ],
    }
}
