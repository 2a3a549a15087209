//! The case index: an append-only JSON registry of opened cases, used to
//! detect repeat interviews for the same person.

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Zoned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use anjuan_core::models::case::{CaseIndex, CaseRecord};

use crate::error::StoreError;

/// Index file name under the case root.
pub const INDEX_FILE_NAME: &str = "案件索引.json";

/// How a looked-up record relates to the queried identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    /// Name and a non-empty identity number both agree.
    ExactId,
    /// Only the name agrees: either side lacks an identity number, or the
    /// stored one differs.
    NameOnly,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::ExactId => "身份证号一致",
            MatchKind::NameOnly => "仅姓名相同",
        }
    }
}

/// One candidate from a lookup, with its classification attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseMatch {
    pub record: CaseRecord,
    pub kind: MatchKind,
}

/// Owner of the persisted index. Loads the whole file at lookup time and
/// rewrites it atomically after each append.
#[derive(Debug, Clone)]
pub struct CaseIndexStore {
    path: PathBuf,
}

impl CaseIndexStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The store for a case root directory, at the conventional file name.
    pub fn for_root(case_root: &Path) -> Self {
        Self::new(case_root.join(INDEX_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole index. A missing file is an empty index; an
    /// unreadable or corrupt file is logged and also treated as empty.
    /// Loading never fails.
    pub fn load(&self) -> CaseIndex {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no case index yet, starting empty");
                return CaseIndex::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "case index unreadable, treating as empty");
                return CaseIndex::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(index) => index,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "case index corrupt, treating as empty");
                CaseIndex::default()
            }
        }
    }

    /// All records whose person name equals `name`, classified against the
    /// supplied identity number. Records without a stored number, and
    /// lookups without one, classify as name-only.
    pub fn find_by_name_and_id(&self, name: &str, id: Option<&str>) -> Vec<CaseMatch> {
        let query_id = id.map(str::trim).filter(|s| !s.is_empty());

        self.load()
            .cases
            .into_iter()
            .filter(|record| record.person_name == name)
            .map(|record| {
                let kind = match (query_id, record.identity_number.as_deref()) {
                    (Some(q), Some(stored)) if !stored.is_empty() && q == stored => {
                        MatchKind::ExactId
                    }
                    _ => MatchKind::NameOnly,
                };
                CaseMatch { record, kind }
            })
            .collect()
    }

    /// Append one record: recompute the total, stamp the update time, and
    /// rewrite the whole file. This is the only mutation path; existing
    /// records are never updated or deleted.
    pub fn append(&self, record: CaseRecord) -> Result<CaseIndex, StoreError> {
        let mut index = self.load();
        index.cases.push(record);
        index.total_cases = index.cases.len();
        index.last_update = Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();

        let json = serde_json::to_vec_pretty(&index)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            path = %self.path.display(),
            total = index.total_cases,
            "case index written"
        );
        Ok(index)
    }
}
