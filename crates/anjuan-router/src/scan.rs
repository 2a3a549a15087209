//! Directory scans backing the branch decisions. The year directory and
//! case folders are the authoritative source for numbering; the index is
//! only consulted for repeat-interview detection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anjuan_core::naming;

use crate::context::SessionContext;
use crate::error::RouterError;

/// Names of the directories directly under the current year's directory,
/// sorted. A year directory that does not exist yet scans as empty.
pub fn year_folder_names(ctx: &SessionContext) -> Result<Vec<String>, RouterError> {
    let dir = ctx.year_dir();
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Of `names`, the case folders whose person component equals `person`.
/// Names that do not parse as case folders are skipped.
pub fn person_case_folders(names: &[String], person: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| {
            naming::parse_case_folder(name).is_some_and(|parsed| parsed.person == person)
        })
        .cloned()
        .collect()
}

/// One witness document found inside a case folder.
#[derive(Debug, Clone, PartialEq)]
pub struct WitnessDoc {
    pub sequence: u32,
    pub witness: String,
    pub path: PathBuf,
}

/// Witness documents for `injured` inside a case folder, ascending by
/// sequence. Other files (main records, strays) are skipped; a missing
/// folder scans as empty.
pub fn witness_documents(folder: &Path, injured: &str) -> Result<Vec<WitnessDoc>, RouterError> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut docs = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(parsed) = naming::parse_witness_document(name) else {
            continue;
        };
        if parsed.injured != injured {
            continue;
        }
        docs.push(WitnessDoc {
            sequence: parsed.sequence,
            witness: parsed.witness,
            path: entry.path(),
        });
    }
    docs.sort_by_key(|doc| doc.sequence);
    Ok(docs)
}
