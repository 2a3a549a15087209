//! Folder and file naming conventions.
//!
//! Pure string functions with no filesystem dependency. These define the
//! canonical on-disk layout of case folders and interview documents, which
//! existing archives depend on:
//!
//! ```text
//! {case_root}/
//! └── {YYYY}/
//!     └── GS-张三-001/                      case folder = case number
//!         ├── GS-张三-001_本人笔录.docx
//!         ├── GS-张三-001_本人补充笔录.docx
//!         └── 张三_证人01_李四.docx          witness sub-documents
//! ```

pub const DOCUMENT_EXT: &str = ".docx";

/// Case folder name (also the case number): `{prefix}-{person}-{NNN}`.
/// Three digits minimum, widening naturally past 999.
pub fn case_folder(prefix: &str, person: &str, sequence: u32) -> String {
    format!("{prefix}-{person}-{sequence:03}")
}

/// Year directory name under the case root.
pub fn year_dir(year: i16) -> String {
    year.to_string()
}

/// Case folder path relative to the case root, as stored in the index.
pub fn case_folder_rel_path(year: i16, folder: &str) -> String {
    format!("{}/{folder}", year_dir(year))
}

/// Main interview document inside a case folder.
pub fn self_document(case_number: &str) -> String {
    format!("{case_number}_本人笔录{DOCUMENT_EXT}")
}

/// Supplement document rendered when an existing case is reused but its
/// main document is gone.
pub fn self_supplement_document(case_number: &str) -> String {
    format!("{case_number}_本人补充笔录{DOCUMENT_EXT}")
}

pub fn legal_entity_document(case_number: &str) -> String {
    format!("{case_number}_法人笔录{DOCUMENT_EXT}")
}

/// Witness sub-document: `{injured}_证人{NN}_{witness}.docx`. Two digits
/// minimum, widening naturally past 99.
pub fn witness_document(injured: &str, sequence: u32, witness: &str) -> String {
    format!("{injured}_证人{sequence:02}_{witness}{DOCUMENT_EXT}")
}

/// A case folder name split back into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCaseFolder {
    pub prefix: String,
    pub person: String,
    pub sequence: u32,
}

/// Parse `{prefix}-{person}-{NNN}`. The person component is everything
/// between the first and the last hyphen, so hyphenated names survive as
/// long as the trailing component is the sequence. Anything else (too few
/// hyphens, empty components, a non-numeric tail) yields `None` and is
/// skipped by directory scans.
pub fn parse_case_folder(name: &str) -> Option<ParsedCaseFolder> {
    let (prefix, rest) = name.split_once('-')?;
    let (person, seq) = rest.rsplit_once('-')?;
    if prefix.is_empty() || person.is_empty() {
        return None;
    }
    Some(ParsedCaseFolder {
        prefix: prefix.to_string(),
        person: person.to_string(),
        sequence: seq.parse().ok()?,
    })
}

/// A witness document file name split back into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWitnessDocument {
    pub injured: String,
    pub sequence: u32,
    pub witness: String,
}

/// Parse `{injured}_证人{NN}_{witness}.docx`. Underscores inside the
/// witness name are kept; other documents in the folder (main records,
/// strays) fail the 证人 tag and are skipped.
pub fn parse_witness_document(file_name: &str) -> Option<ParsedWitnessDocument> {
    let stem = file_name.strip_suffix(DOCUMENT_EXT)?;
    let (injured, rest) = stem.split_once('_')?;
    let (tag, witness) = rest.split_once('_')?;
    let sequence: u32 = tag.strip_prefix("证人")?.parse().ok()?;
    if injured.is_empty() {
        return None;
    }
    Some(ParsedWitnessDocument {
        injured: injured.to_string(),
        sequence,
        witness: witness.to_string(),
    })
}
