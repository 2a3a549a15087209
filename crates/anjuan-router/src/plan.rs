//! Interview plans and their execution.
//!
//! A plan is the full list of filesystem effects one interview will have,
//! built before anything is touched. Execution applies the steps in order
//! and stops at the first failure; a document is always preceded by its
//! folder and its index record.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use anjuan_core::fields::FieldMap;
use anjuan_core::models::case::CaseRecord;
use anjuan_render::template::{render_to_docx, TemplateKind};
use anjuan_render::RenderError;
use anjuan_store::index::CaseIndexStore;

use crate::context::SessionContext;
use crate::error::RouterError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum PlanStep {
    CreateCaseFolder {
        path: PathBuf,
    },
    AppendIndex {
        record: CaseRecord,
    },
    RenderDocument {
        kind: TemplateKind,
        output: PathBuf,
        fields: FieldMap,
    },
    /// Hand the document to the OS viewer. Recorded during execution,
    /// performed by the caller.
    OpenDocument {
        path: PathBuf,
    },
}

/// Every effect one resolved interview will have, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewPlan {
    pub case_number: String,
    pub steps: Vec<PlanStep>,
}

impl InterviewPlan {
    /// Whether this plan produces a new document (as opposed to only
    /// reopening an existing one).
    pub fn renders_document(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step, PlanStep::RenderDocument { .. }))
    }
}

/// What execution actually did.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    pub case_number: String,
    pub created_folders: Vec<PathBuf>,
    pub rendered: Vec<PathBuf>,
    pub index_appended: bool,
    /// Document the caller should hand to the OS viewer, if any.
    pub open_path: Option<PathBuf>,
}

/// Apply a plan. Templates are checked up front: a missing one aborts
/// before any filesystem change. Past that point the first failing step
/// aborts and earlier steps are not rolled back.
pub fn execute(
    plan: &InterviewPlan,
    ctx: &SessionContext,
    store: &CaseIndexStore,
) -> Result<ExecutionReport, RouterError> {
    for step in &plan.steps {
        if let PlanStep::RenderDocument { kind, .. } = step {
            let template = ctx.templates_dir.join(kind.file_name());
            if !template.is_file() {
                return Err(
                    RenderError::TemplateNotFound(template.display().to_string()).into(),
                );
            }
        }
    }

    let mut report = ExecutionReport {
        case_number: plan.case_number.clone(),
        ..ExecutionReport::default()
    };

    for step in &plan.steps {
        match step {
            PlanStep::CreateCaseFolder { path } => {
                fs::create_dir_all(path)?;
                info!(path = %path.display(), "case folder created");
                report.created_folders.push(path.clone());
            }
            PlanStep::AppendIndex { record } => {
                let index = store.append(record.clone())?;
                info!(
                    case_number = %record.case_number,
                    total = index.total_cases,
                    "case recorded in index"
                );
                report.index_appended = true;
            }
            PlanStep::RenderDocument {
                kind,
                output,
                fields,
            } => {
                render_to_docx(&ctx.templates_dir, *kind, fields, output)?;
                info!(
                    template = kind.file_name(),
                    output = %output.display(),
                    "document rendered"
                );
                report.rendered.push(output.clone());
            }
            PlanStep::OpenDocument { path } => {
                report.open_path = Some(path.clone());
            }
        }
    }

    Ok(report)
}
