//! The self-interview branch: the injured worker's own record. The only
//! branch that registers cases in the index.

use tracing::info;

use anjuan_core::casenum;
use anjuan_core::identity;
use anjuan_core::models::case::CaseRecord;
use anjuan_core::models::interview::InterviewForm;
use anjuan_core::models::person::PersonInfo;
use anjuan_core::naming;
use anjuan_render::template::TemplateKind;
use anjuan_store::index::{CaseIndexStore, CaseMatch};

use crate::context::SessionContext;
use crate::error::RouterError;
use crate::plan::{InterviewPlan, PlanStep};
use crate::scan;

/// Outcome of looking the person up in the index.
#[derive(Debug)]
pub enum SelfResolution {
    /// Nothing on file; the plan opens a fresh dossier.
    NewCase(InterviewPlan),
    /// Earlier cases exist. The operator picks one or starts anew.
    ExistingCases(Vec<CaseMatch>),
}

/// The operator's answer when earlier cases were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfChoice {
    /// Reuse the i-th match of the presented list.
    UseExisting(usize),
    StartNew,
    Cancel,
}

/// Look the interviewee up. An empty name cannot be routed at all.
pub fn resolve_self(
    ctx: &SessionContext,
    form: &InterviewForm,
    store: &CaseIndexStore,
) -> Result<SelfResolution, RouterError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(RouterError::MissingName);
    }

    let id = form.id_number.trim();
    let matches = store.find_by_name_and_id(name, (!id.is_empty()).then_some(id));
    if matches.is_empty() {
        return Ok(SelfResolution::NewCase(new_case_plan(ctx, form)?));
    }

    info!(name, count = matches.len(), "person already on file");
    Ok(SelfResolution::ExistingCases(matches))
}

/// Turn the operator's answer into a plan. `Cancel` abandons the session
/// with no side effects.
pub fn decide_self(
    ctx: &SessionContext,
    form: &InterviewForm,
    matches: &[CaseMatch],
    choice: SelfChoice,
) -> Result<Option<InterviewPlan>, RouterError> {
    match choice {
        SelfChoice::Cancel => Ok(None),
        SelfChoice::StartNew => Ok(Some(new_case_plan(ctx, form)?)),
        SelfChoice::UseExisting(i) => {
            let chosen = matches.get(i).ok_or(RouterError::InvalidSelection(i))?;
            Ok(Some(reuse_case_plan(ctx, form, &chosen.record)))
        }
    }
}

/// Open a fresh dossier: mint a number from the year's folder set, create
/// the folder, register the case, render the main record.
pub fn new_case_plan(
    ctx: &SessionContext,
    form: &InterviewForm,
) -> Result<InterviewPlan, RouterError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(RouterError::MissingName);
    }

    let existing = scan::year_folder_names(ctx)?;
    let case_number = casenum::generate(form.case_type(), name, &existing);
    let folder = ctx.year_dir().join(&case_number);
    let output = folder.join(naming::self_document(&case_number));
    let fields = ctx.field_map(form, &case_number);

    Ok(InterviewPlan {
        case_number: case_number.clone(),
        steps: vec![
            PlanStep::CreateCaseFolder { path: folder },
            PlanStep::AppendIndex {
                record: case_record(ctx, form, &case_number),
            },
            PlanStep::RenderDocument {
                kind: TemplateKind::SelfOrdinary,
                output: output.clone(),
                fields,
            },
            PlanStep::OpenDocument { path: output },
        ],
    })
}

/// Continue in an existing dossier. When the main record is still there
/// the plan only reopens it; when it has gone missing a supplement record
/// is taken in the same folder. Neither touches the index.
fn reuse_case_plan(
    ctx: &SessionContext,
    form: &InterviewForm,
    record: &CaseRecord,
) -> InterviewPlan {
    let folder = ctx.resolve_folder(&record.folder_path);
    let main_doc = folder.join(naming::self_document(&record.case_number));
    if main_doc.exists() {
        info!(case_number = %record.case_number, "reopening existing record");
        return InterviewPlan {
            case_number: record.case_number.clone(),
            steps: vec![PlanStep::OpenDocument { path: main_doc }],
        };
    }

    let output = folder.join(naming::self_supplement_document(&record.case_number));
    let fields = ctx.field_map(form, &record.case_number);
    InterviewPlan {
        case_number: record.case_number.clone(),
        steps: vec![
            PlanStep::RenderDocument {
                kind: TemplateKind::SelfSupplement,
                output: output.clone(),
                fields,
            },
            PlanStep::OpenDocument { path: output },
        ],
    }
}

fn case_record(ctx: &SessionContext, form: &InterviewForm, case_number: &str) -> CaseRecord {
    let name = form.name.trim();
    let id = form.id_number.trim();
    let profile = identity::parse(id, ctx.today);
    CaseRecord {
        case_number: case_number.to_string(),
        person_name: name.to_string(),
        identity_number: (!id.is_empty()).then(|| id.to_string()),
        case_type: form.case_type(),
        year: ctx.year(),
        folder_path: naming::case_folder_rel_path(ctx.year(), case_number),
        created_date: ctx.today,
        person_info: PersonInfo {
            name: name.to_string(),
            gender: profile.gender,
            age: profile.age,
            phone: form.phone.trim().to_string(),
        },
    }
}
