use std::fs;

use jiff::civil::date;
use tempfile::TempDir;

use anjuan_core::models::case::{CaseRecord, CaseType};
use anjuan_core::models::person::{Gender, PersonInfo};
use anjuan_store::index::{CaseIndexStore, MatchKind, INDEX_FILE_NAME};

fn record(case_number: &str, name: &str, id: Option<&str>) -> CaseRecord {
    CaseRecord {
        case_number: case_number.to_string(),
        person_name: name.to_string(),
        identity_number: id.map(str::to_string),
        case_type: CaseType::Ordinary,
        year: 2024,
        folder_path: format!("2024/{case_number}"),
        created_date: date(2024, 6, 15),
        person_info: PersonInfo {
            name: name.to_string(),
            gender: Some(Gender::Male),
            age: Some(34),
            phone: "13800000000".to_string(),
        },
    }
}

#[test]
fn missing_index_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());

    let index = store.load();
    assert!(index.cases.is_empty());
    assert_eq!(index.total_cases, 0);
    assert_eq!(index.last_update, "");
}

#[test]
fn corrupt_index_loads_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(INDEX_FILE_NAME), b"{ not json").unwrap();

    let store = CaseIndexStore::for_root(dir.path());
    let index = store.load();
    assert!(index.cases.is_empty());
    assert_eq!(index.total_cases, 0);
    assert_eq!(index.last_update, "");
}

#[test]
fn load_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());
    store
        .append(record("GS-张三-001", "张三", Some("410101199001011234")))
        .unwrap();

    assert_eq!(store.load(), store.load());
}

#[test]
fn append_then_find_matches_exactly_once() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());
    store
        .append(record("GS-张三-001", "张三", Some("410101199001011234")))
        .unwrap();

    let matches = store.find_by_name_and_id("张三", Some("410101199001011234"));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, MatchKind::ExactId);
    assert_eq!(matches[0].record.case_number, "GS-张三-001");
}

#[test]
fn differing_or_absent_ids_match_name_only() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());
    store
        .append(record("GS-张三-001", "张三", Some("410101199001011234")))
        .unwrap();
    store.append(record("GS-张三-002", "张三", None)).unwrap();

    let matches = store.find_by_name_and_id("张三", Some("999999199001011234"));
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.kind == MatchKind::NameOnly));

    let matches = store.find_by_name_and_id("张三", None);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.kind == MatchKind::NameOnly));
}

#[test]
fn other_names_never_match() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());
    store
        .append(record("GS-张三-001", "张三", Some("410101199001011234")))
        .unwrap();

    assert!(store.find_by_name_and_id("李四", None).is_empty());
}

#[test]
fn append_updates_totals_and_stamp() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());

    store.append(record("GS-张三-001", "张三", None)).unwrap();
    let index = store.append(record("GS-李四-001", "李四", None)).unwrap();

    assert_eq!(index.total_cases, 2);
    assert_eq!(index.cases.len(), 2);
    assert!(!index.last_update.is_empty());
}

#[test]
fn persisted_file_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());
    store
        .append(record("GS-张三-001", "张三", Some("410101199001011234")))
        .unwrap();

    let text = fs::read_to_string(dir.path().join(INDEX_FILE_NAME)).unwrap();
    assert!(text.contains("\"totalCases\""));
    assert!(text.contains("\"lastUpdate\""));
    assert!(text.contains("\"caseNumber\""));
    assert!(text.contains("\"folderPath\""));
    assert!(text.contains("\"ordinary\""));

    // the temp file from the atomic rewrite must be gone
    let stray = dir.path().join(format!("{INDEX_FILE_NAME}.tmp"));
    assert!(!stray.exists());
}

#[test]
fn record_without_identity_omits_the_key() {
    let dir = TempDir::new().unwrap();
    let store = CaseIndexStore::for_root(dir.path());
    store.append(record("GS-张三-001", "张三", None)).unwrap();

    let text = fs::read_to_string(dir.path().join(INDEX_FILE_NAME)).unwrap();
    assert!(!text.contains("identityNumber"));
}
