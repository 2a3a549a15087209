use serde::{Deserialize, Serialize};

use crate::models::case::CaseType;
use crate::models::person::PersonType;

/// Everything the presentation layer collected from the operator, handed to
/// the router as one plain value. Field strings arrive as typed; trimming
/// happens where they are consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewForm {
    pub person_type: PersonType,

    /// 个人申请 checkbox.
    #[serde(default)]
    pub individual_application: bool,
    /// 死亡案件 checkbox.
    #[serde(default)]
    pub death_case: bool,

    /// Position in the 拟用条例 combo box, 0–6. Out-of-range or absent
    /// renders as 未知条例.
    #[serde(default)]
    pub regulation_index: Option<u8>,

    /// Interviewee's name: the injured worker for self interviews, the
    /// witness or representative otherwise.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub id_address: String,
    #[serde(default)]
    pub current_address: String,
    #[serde(default)]
    pub phone: String,
    /// 岗位.
    #[serde(default)]
    pub position: String,

    /// 受伤职工. For self interviews this is taken from `name`.
    #[serde(default)]
    pub injured_worker: String,

    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub work_unit: String,
    #[serde(default)]
    pub workplace: String,

    #[serde(default)]
    pub operator: String,
}

impl InterviewForm {
    pub fn case_type(&self) -> CaseType {
        CaseType::from_flags(self.individual_application, self.death_case)
    }

    /// The injured worker's name this interview is about. Self interviews
    /// are their own subject.
    pub fn injured_name(&self) -> &str {
        match self.person_type {
            PersonType::SelfParty => self.name.trim(),
            _ => self.injured_worker.trim(),
        }
    }
}
