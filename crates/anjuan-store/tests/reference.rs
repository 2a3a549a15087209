use std::fs;
use std::str::FromStr;

use tempfile::TempDir;

use anjuan_store::reference::{ReferenceCategory, ReferenceList};

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let list = ReferenceList::new(dir.path(), ReferenceCategory::Employer);

    assert!(list.load().is_empty());
}

#[test]
fn append_keeps_insertion_order() {
    let dir = TempDir::new().unwrap();
    let list = ReferenceList::new(dir.path(), ReferenceCategory::Employer);

    assert!(list.append("某某机械有限公司").unwrap());
    assert!(list.append("另一家公司").unwrap());

    assert_eq!(list.load(), vec!["某某机械有限公司", "另一家公司"]);
}

#[test]
fn duplicate_append_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let list = ReferenceList::new(dir.path(), ReferenceCategory::WorkUnit);

    assert!(list.append("某某机械有限公司").unwrap());
    assert!(!list.append("某某机械有限公司").unwrap());
    assert!(!list.append("  某某机械有限公司  ").unwrap());

    assert_eq!(list.load().len(), 1);
}

#[test]
fn blank_append_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let list = ReferenceList::new(dir.path(), ReferenceCategory::Workplace);

    assert!(!list.append("   ").unwrap());
    assert!(!dir
        .path()
        .join(ReferenceCategory::Workplace.file_name())
        .exists());
}

#[test]
fn remove_reports_whether_anything_changed() {
    let dir = TempDir::new().unwrap();
    let list = ReferenceList::new(dir.path(), ReferenceCategory::Employer);
    list.append("某某机械有限公司").unwrap();

    assert!(list.remove("某某机械有限公司").unwrap());
    assert!(!list.remove("某某机械有限公司").unwrap());
    assert!(list.load().is_empty());
}

#[test]
fn file_is_one_name_per_line() {
    let dir = TempDir::new().unwrap();
    let list = ReferenceList::new(dir.path(), ReferenceCategory::Employer);
    list.append("某某机械有限公司").unwrap();
    list.append("另一家公司").unwrap();

    let path = dir.path().join(ReferenceCategory::Employer.file_name());
    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, "某某机械有限公司\n另一家公司\n");
}

#[test]
fn load_trims_and_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(ReferenceCategory::WorkUnit.file_name());
    fs::write(&path, "  某某机械有限公司  \n\n   \n另一家公司\n").unwrap();

    let list = ReferenceList::new(dir.path(), ReferenceCategory::WorkUnit);
    assert_eq!(list.load(), vec!["某某机械有限公司", "另一家公司"]);
}

#[test]
fn category_parses_from_english_and_chinese() {
    assert_eq!(
        ReferenceCategory::from_str("employer").unwrap(),
        ReferenceCategory::Employer
    );
    assert_eq!(
        ReferenceCategory::from_str("用工单位").unwrap(),
        ReferenceCategory::WorkUnit
    );
    assert_eq!(
        ReferenceCategory::from_str("工作场所").unwrap(),
        ReferenceCategory::Workplace
    );
    assert!(ReferenceCategory::from_str("bogus").is_err());
}

#[test]
fn category_file_names_are_fixed() {
    assert_eq!(
        ReferenceCategory::Employer.file_name(),
        "用人单位名称汇总.txt"
    );
    assert_eq!(
        ReferenceCategory::WorkUnit.file_name(),
        "用工单位名称汇总.txt"
    );
    assert_eq!(
        ReferenceCategory::Workplace.file_name(),
        "工作场所名称汇总.txt"
    );
}
