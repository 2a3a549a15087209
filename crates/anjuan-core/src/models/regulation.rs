//! 工伤保险条例 clause lookup, mirroring the order of the form's combo box.

pub const UNKNOWN_REGULATION: &str = "未知条例";

const CLAUSES: [&str; 7] = [
    "第十四条第一款第一项",
    "第十四条第一款第二项",
    "第十四条第一款第三项",
    "第十四条第一款第四项",
    "第十四条第一款第五项",
    "第十四条第一款第六项",
    "第十五条第一款第一项",
];

/// Clause text for a combo-box position, `None` when out of range.
pub fn clause(index: u8) -> Option<&'static str> {
    CLAUSES.get(usize::from(index)).copied()
}

/// Clause text for the template field, with the original's fallback for
/// unknown positions.
pub fn clause_or_unknown(index: Option<u8>) -> &'static str {
    index.and_then(clause).unwrap_or(UNKNOWN_REGULATION)
}
