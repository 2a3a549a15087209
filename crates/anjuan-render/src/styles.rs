use serde::{Deserialize, Serialize};

/// Document styling for generated interview records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxStyles {
    /// Font for body text, applied to both the ascii and east-asian slots.
    pub body_font: String,

    /// Font for the document title line.
    pub title_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub title_size: usize,
}

impl Default for DocxStyles {
    fn default() -> Self {
        Self {
            body_font: "宋体".to_string(),
            title_font: "黑体".to_string(),
            body_size: 12,
            title_size: 16,
        }
    }
}
