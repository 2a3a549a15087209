//! Reference name lists: single-column text files of employer, work unit,
//! and workplace names kept next to the case folders.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::StoreError;

/// The three maintained lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceCategory {
    Employer,
    WorkUnit,
    Workplace,
}

impl ReferenceCategory {
    pub const ALL: [ReferenceCategory; 3] = [
        ReferenceCategory::Employer,
        ReferenceCategory::WorkUnit,
        ReferenceCategory::Workplace,
    ];

    /// File name under the case root.
    pub fn file_name(&self) -> &'static str {
        match self {
            ReferenceCategory::Employer => "用人单位名称汇总.txt",
            ReferenceCategory::WorkUnit => "用工单位名称汇总.txt",
            ReferenceCategory::Workplace => "工作场所名称汇总.txt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferenceCategory::Employer => "用人单位",
            ReferenceCategory::WorkUnit => "用工单位",
            ReferenceCategory::Workplace => "工作场所",
        }
    }
}

impl FromStr for ReferenceCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employer" | "用人单位" => Ok(ReferenceCategory::Employer),
            "work-unit" | "用工单位" => Ok(ReferenceCategory::WorkUnit),
            "workplace" | "工作场所" => Ok(ReferenceCategory::Workplace),
            other => Err(StoreError::UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReferenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One list on disk: a text file with one name per line.
#[derive(Debug, Clone)]
pub struct ReferenceList {
    path: PathBuf,
}

impl ReferenceList {
    pub fn new(dir: &Path, category: ReferenceCategory) -> Self {
        Self {
            path: dir.join(category.file_name()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All non-empty trimmed lines, in file order. Missing or unreadable
    /// files load as empty lists.
    pub fn load(&self) -> Vec<String> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "reference list missing, treating as empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "reference list unreadable, treating as empty");
                return Vec::new();
            }
        };

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Add a name if it is not already present. Returns whether the file
    /// changed. Blank input is ignored.
    pub fn append(&self, name: &str) -> Result<bool, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let mut entries = self.load();
        if entries.iter().any(|existing| existing == name) {
            return Ok(false);
        }
        entries.push(name.to_string());
        self.write(&entries)?;
        Ok(true)
    }

    /// Remove a name if present. Returns whether the file changed.
    pub fn remove(&self, name: &str) -> Result<bool, StoreError> {
        let name = name.trim();
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|existing| existing != name);
        if entries.len() == before {
            return Ok(false);
        }
        self.write(&entries)?;
        Ok(true)
    }

    fn write(&self, entries: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut text = entries.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        let tmp_path = self.path.with_extension("txt.tmp");
        fs::write(&tmp_path, text.as_bytes())?;
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), count = entries.len(), "reference list written");
        Ok(())
    }
}
