//! Case number generation.
//!
//! A case number is `{prefix}-{name}-{sequence}`. Sequences are scoped per
//! calendar year and per (prefix, person): callers pass the folder names of
//! the current year's directory, and only names belonging to the same
//! prefix and person count.

use crate::models::case::CaseType;
use crate::naming;

/// Mint the next case number for a person within the given set of existing
/// folder names. The set must already be scoped to the current year.
pub fn generate(case_type: CaseType, person_name: &str, existing_folders: &[String]) -> String {
    let prefix = case_type.prefix();
    let next = next_sequence(prefix, person_name, existing_folders);
    naming::case_folder(prefix, person_name, next)
}

/// Highest sequence already taken for `{prefix}-{person_name}-…` plus one,
/// or 1 when the person has no folder yet. Folder names whose remainder
/// after the exact `{prefix}-{person}-` prefix is not an integer are
/// ignored, not fatal.
pub fn next_sequence(prefix: &str, person_name: &str, existing_folders: &[String]) -> u32 {
    let scope = format!("{prefix}-{person_name}-");
    existing_folders
        .iter()
        .filter_map(|name| name.strip_prefix(scope.as_str()))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
