use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::person::PersonInfo;

/// Case classification, derived from the two form checkboxes
/// (个人申请 / 死亡). Determines the case-number prefix and the display
/// label written into documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseType {
    Ordinary,
    Individual,
    Death,
    IndividualDeath,
}

impl CaseType {
    pub fn from_flags(individual: bool, death: bool) -> Self {
        match (individual, death) {
            (true, true) => CaseType::IndividualDeath,
            (true, false) => CaseType::Individual,
            (false, true) => CaseType::Death,
            (false, false) => CaseType::Ordinary,
        }
    }

    /// Case-number prefix. Unknown types never occur (the enum is total),
    /// so unlike the original lookup table there is no fallback arm.
    pub fn prefix(&self) -> &'static str {
        match self {
            CaseType::Ordinary => "GS",
            CaseType::Individual => "GR",
            CaseType::Death => "GSW",
            CaseType::IndividualDeath => "GRW",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseType::Ordinary => "普通案件",
            CaseType::Individual => "个人案件",
            CaseType::Death => "死亡案件",
            CaseType::IndividualDeath => "个人申请死亡案件",
        }
    }
}

impl FromStr for CaseType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordinary" | "普通案件" => Ok(CaseType::Ordinary),
            "individual" | "个人案件" => Ok(CaseType::Individual),
            "death" | "死亡案件" => Ok(CaseType::Death),
            "individual-death" | "个人申请死亡案件" => Ok(CaseType::IndividualDeath),
            other => Err(CoreError::InvalidCaseType(other.to_string())),
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One interview case, as persisted in the case index. Created once when a
/// new case is opened; never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub case_number: String,
    pub person_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,
    pub case_type: CaseType,
    pub year: i16,
    /// Path of the case folder relative to the case root, `YYYY/{folder}`.
    pub folder_path: String,
    pub created_date: jiff::civil::Date,
    pub person_info: PersonInfo,
}

/// The whole persisted index: every record plus aggregate metadata.
/// Rewritten as a unit on each append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseIndex {
    pub cases: Vec<CaseRecord>,
    pub total_cases: usize,
    /// `%Y-%m-%d %H:%M:%S` stamp of the last append; empty when the index
    /// has never been written.
    #[serde(default)]
    pub last_update: String,
}
