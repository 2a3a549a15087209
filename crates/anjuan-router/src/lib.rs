//! anjuan-router
//!
//! The interview rule engine. Maps a filled form to a plan of filesystem
//! effects, surfacing every operator decision to the caller instead of
//! prompting for it:
//!
//! - `resolve()`: classify the form by person type, scan folders and
//!   index, return either a ready plan or the decision to be made
//! - `decide_self()` / `decide_witness()`: turn a decision into a plan
//! - `execute()`: apply a plan (create folders, append the index, render
//!   documents); the viewer hand-off is reported back, never performed here

pub mod context;
pub mod error;
pub mod legal_entity;
pub mod plan;
pub mod scan;
pub mod self_interview;
pub mod witness;

pub use crate::context::SessionContext;
pub use crate::error::RouterError;
pub use crate::legal_entity::resolve_legal;
pub use crate::plan::{execute, ExecutionReport, InterviewPlan, PlanStep};
pub use crate::self_interview::{decide_self, resolve_self, SelfChoice, SelfResolution};
pub use crate::witness::{decide_witness, resolve_witness, WitnessChoice, WitnessResolution};

use anjuan_core::models::interview::InterviewForm;
use anjuan_core::models::person::PersonType;
use anjuan_store::index::CaseIndexStore;

/// What a form resolves to, by person type. Self and witness interviews
/// may carry a decision point; legal-entity interviews never do.
#[derive(Debug)]
pub enum Resolution {
    SelfInterview(SelfResolution),
    Witness(WitnessResolution),
    LegalEntity(InterviewPlan),
}

/// Route a form to its branch.
pub fn resolve(
    ctx: &SessionContext,
    form: &InterviewForm,
    store: &CaseIndexStore,
) -> Result<Resolution, RouterError> {
    match form.person_type {
        PersonType::SelfParty => Ok(Resolution::SelfInterview(self_interview::resolve_self(
            ctx, form, store,
        )?)),
        PersonType::Witness => Ok(Resolution::Witness(witness::resolve_witness(ctx, form)?)),
        PersonType::LegalEntity => Ok(Resolution::LegalEntity(legal_entity::resolve_legal(
            ctx, form,
        )?)),
    }
}
