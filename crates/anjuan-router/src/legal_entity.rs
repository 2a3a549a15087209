//! The legal-entity branch: a statement from the employer's representative.
//! Always a fresh case folder under the injured worker's name; nothing is
//! matched against and the index is not written.

use anjuan_core::casenum;
use anjuan_core::models::interview::InterviewForm;
use anjuan_core::naming;
use anjuan_render::template::TemplateKind;

use crate::context::SessionContext;
use crate::error::RouterError;
use crate::plan::{InterviewPlan, PlanStep};
use crate::scan;

pub fn resolve_legal(
    ctx: &SessionContext,
    form: &InterviewForm,
) -> Result<InterviewPlan, RouterError> {
    let injured = form.injured_name();
    if injured.is_empty() {
        return Err(RouterError::MissingInjuredName);
    }

    let existing = scan::year_folder_names(ctx)?;
    let case_number = casenum::generate(form.case_type(), injured, &existing);
    let folder = ctx.year_dir().join(&case_number);
    let output = folder.join(naming::legal_entity_document(&case_number));
    let fields = ctx.field_map(form, &case_number);

    Ok(InterviewPlan {
        case_number: case_number.clone(),
        steps: vec![
            PlanStep::CreateCaseFolder { path: folder },
            PlanStep::RenderDocument {
                kind: TemplateKind::LegalEntity,
                output: output.clone(),
                fields,
            },
            PlanStep::OpenDocument { path: output },
        ],
    })
}
