//! Session context: everything one interview session needs to know about
//! its surroundings, captured once so the branch logic stays pure.

use std::path::PathBuf;

use jiff::civil::Date;
use jiff::Zoned;

use anjuan_core::fields::{build_field_map, FieldMap};
use anjuan_core::identity;
use anjuan_core::models::interview::InterviewForm;
use anjuan_core::naming;

/// Where cases and templates live, plus the session clock. The clock is
/// captured at construction: every document of one session carries the
/// same 当前日期/当前时间, and year scoping cannot flip mid-session at
/// midnight on New Year's Eve.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub case_root: PathBuf,
    pub templates_dir: PathBuf,
    pub today: Date,
    /// Preformatted %Y年%m月%d日.
    pub current_date: String,
    /// Preformatted %H时%M分.
    pub current_time: String,
    /// Operator from settings, used when the form leaves its own blank.
    pub operator: String,
}

impl SessionContext {
    pub fn new(case_root: PathBuf, templates_dir: PathBuf) -> Self {
        Self::at(case_root, templates_dir, &Zoned::now())
    }

    /// Context pinned to an explicit instant.
    pub fn at(case_root: PathBuf, templates_dir: PathBuf, now: &Zoned) -> Self {
        Self {
            case_root,
            templates_dir,
            today: now.date(),
            current_date: now.strftime("%Y年%m月%d日").to_string(),
            current_time: now.strftime("%H时%M分").to_string(),
            operator: String::new(),
        }
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    pub fn year(&self) -> i16 {
        self.today.year()
    }

    /// The current year's directory under the case root.
    pub fn year_dir(&self) -> PathBuf {
        self.case_root.join(naming::year_dir(self.year()))
    }

    /// Absolute path of a case folder stored relative in the index.
    pub fn resolve_folder(&self, folder_path: &str) -> PathBuf {
        self.case_root.join(folder_path)
    }

    /// Field map for one document. The identity profile is derived here;
    /// an empty form operator falls back to the settings operator.
    pub fn field_map(&self, form: &InterviewForm, case_number: &str) -> FieldMap {
        let profile = identity::parse(form.id_number.trim(), self.today);
        if form.operator.trim().is_empty() && !self.operator.trim().is_empty() {
            let mut form = form.clone();
            form.operator = self.operator.clone();
            return build_field_map(
                &form,
                case_number,
                &profile,
                &self.current_date,
                &self.current_time,
            );
        }
        build_field_map(
            form,
            case_number,
            &profile,
            &self.current_date,
            &self.current_time,
        )
    }
}
