use anjuan_core::casenum::{generate, next_sequence};
use anjuan_core::models::case::CaseType;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn first_case_gets_sequence_001() {
    assert_eq!(generate(CaseType::Ordinary, "张三", &[]), "GS-张三-001");
}

#[test]
fn sequence_continues_after_existing_cases() {
    let existing = names(&["GS-张三-001", "GS-张三-002"]);
    assert_eq!(generate(CaseType::Ordinary, "张三", &existing), "GS-张三-003");
}

#[test]
fn other_people_and_prefixes_do_not_interfere() {
    let existing = names(&["GS-李四-007", "GR-张三-004", "GS-张三-001"]);
    assert_eq!(generate(CaseType::Ordinary, "张三", &existing), "GS-张三-002");
}

#[test]
fn malformed_suffixes_are_ignored() {
    let existing = names(&["GS-张三-abc", "GS-张三-", "GS-张三-002", "notes"]);
    assert_eq!(next_sequence("GS", "张三", &existing), 3);
}

#[test]
fn gaps_are_never_refilled() {
    let existing = names(&["GS-张三-001", "GS-张三-005"]);
    assert_eq!(generate(CaseType::Ordinary, "张三", &existing), "GS-张三-006");
}

#[test]
fn sequence_widens_past_three_digits() {
    let existing = names(&["GS-张三-999"]);
    assert_eq!(generate(CaseType::Ordinary, "张三", &existing), "GS-张三-1000");
}

#[test]
fn prefix_follows_the_case_type() {
    assert_eq!(generate(CaseType::Individual, "张三", &[]), "GR-张三-001");
    assert_eq!(generate(CaseType::Death, "张三", &[]), "GSW-张三-001");
    assert_eq!(generate(CaseType::IndividualDeath, "张三", &[]), "GRW-张三-001");
}
