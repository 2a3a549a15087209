//! anjuan-render
//!
//! Interview document generation: plain-text templates with `{字段}`
//! placeholders, substituted from a field map and packed into DOCX.

pub mod docx;
pub mod error;
pub mod starter;
pub mod styles;
pub mod template;

pub use crate::error::RenderError;
pub use crate::starter::{install_starter_templates, starter_text};
pub use crate::styles::DocxStyles;
pub use crate::template::{load_template, render_to_docx, substitute, TemplateKind};
