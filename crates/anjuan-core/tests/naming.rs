use anjuan_core::naming::{
    case_folder, case_folder_rel_path, legal_entity_document, parse_case_folder,
    parse_witness_document, self_document, self_supplement_document, witness_document,
    ParsedCaseFolder, ParsedWitnessDocument,
};

#[test]
fn case_folder_is_prefix_name_sequence() {
    assert_eq!(case_folder("GS", "张三", 1), "GS-张三-001");
    assert_eq!(case_folder("GRW", "张三", 1000), "GRW-张三-1000");
}

#[test]
fn interview_documents_carry_the_case_number() {
    assert_eq!(self_document("GS-张三-001"), "GS-张三-001_本人笔录.docx");
    assert_eq!(
        self_supplement_document("GS-张三-001"),
        "GS-张三-001_本人补充笔录.docx"
    );
    assert_eq!(
        legal_entity_document("GS-张三-001"),
        "GS-张三-001_法人笔录.docx"
    );
}

#[test]
fn witness_numbering_is_two_digit_and_widens() {
    assert_eq!(witness_document("张三", 1, "李四"), "张三_证人01_李四.docx");
    assert_eq!(witness_document("张三", 100, "李四"), "张三_证人100_李四.docx");
}

#[test]
fn rel_path_scopes_by_year() {
    assert_eq!(case_folder_rel_path(2024, "GS-张三-001"), "2024/GS-张三-001");
}

#[test]
fn case_folder_parses_back_into_components() {
    assert_eq!(
        parse_case_folder("GS-张三-003"),
        Some(ParsedCaseFolder {
            prefix: "GS".to_string(),
            person: "张三".to_string(),
            sequence: 3,
        })
    );
}

#[test]
fn hyphenated_person_names_survive_parsing() {
    assert_eq!(
        parse_case_folder("GS-Anna-Marie-012"),
        Some(ParsedCaseFolder {
            prefix: "GS".to_string(),
            person: "Anna-Marie".to_string(),
            sequence: 12,
        })
    );
}

#[test]
fn malformed_folder_names_parse_to_none() {
    assert_eq!(parse_case_folder("notes"), None);
    assert_eq!(parse_case_folder("GS-张三"), None);
    assert_eq!(parse_case_folder("GS-张三-abc"), None);
    assert_eq!(parse_case_folder("-张三-001"), None);
    assert_eq!(parse_case_folder("GS--001"), None);
}

#[test]
fn witness_document_parses_back_into_components() {
    assert_eq!(
        parse_witness_document("张三_证人02_李四.docx"),
        Some(ParsedWitnessDocument {
            injured: "张三".to_string(),
            sequence: 2,
            witness: "李四".to_string(),
        })
    );
}

#[test]
fn underscores_in_the_witness_name_are_kept() {
    let parsed = parse_witness_document("张三_证人01_van_der_Berg.docx").unwrap();
    assert_eq!(parsed.witness, "van_der_Berg");
}

#[test]
fn other_documents_are_not_witness_records() {
    assert_eq!(parse_witness_document("GS-张三-001_本人笔录.docx"), None);
    assert_eq!(parse_witness_document("张三_李四_王五.docx"), None);
    assert_eq!(parse_witness_document("张三_证人xx_李四.docx"), None);
    assert_eq!(parse_witness_document("张三_证人01_李四.txt"), None);
}
