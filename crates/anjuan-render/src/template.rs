//! Template loading and placeholder substitution.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use anjuan_core::fields::FieldMap;

use crate::docx::build_docx;
use crate::error::RenderError;
use crate::styles::DocxStyles;

/// The four interview record templates, one text file each under the
/// templates directory. File names are part of the installation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    SelfOrdinary,
    SelfSupplement,
    Witness,
    LegalEntity,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::SelfOrdinary,
        TemplateKind::SelfSupplement,
        TemplateKind::Witness,
        TemplateKind::LegalEntity,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::SelfOrdinary => "本人普通案件模板.txt",
            TemplateKind::SelfSupplement => "本人补充笔录模板.txt",
            TemplateKind::Witness => "证人笔录模板.txt",
            TemplateKind::LegalEntity => "法人笔录模板.txt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::SelfOrdinary => "本人笔录",
            TemplateKind::SelfSupplement => "本人补充笔录",
            TemplateKind::Witness => "证人笔录",
            TemplateKind::LegalEntity => "法人笔录",
        }
    }
}

/// Read a template's text. A missing file is the operator-facing
/// 模板文件不存在 condition, carrying the full path.
pub fn load_template(templates_dir: &Path, kind: TemplateKind) -> Result<String, RenderError> {
    let path = templates_dir.join(kind.file_name());
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(RenderError::TemplateNotFound(path.display().to_string()))
        }
        Err(e) => Err(RenderError::TemplateRead(format!(
            "{}: {e}",
            path.display()
        ))),
    }
}

/// Replace every `{键}` whose key appears in the field map. Placeholders
/// with no matching key are left untouched; there is no escaping syntax.
pub fn substitute(text: &str, fields: &FieldMap) -> String {
    let mut out = text.to_string();
    for (key, value) in fields {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Full pipeline for one document: load the template, substitute the field
/// map, pack to DOCX, write to `output` (parent directories created).
pub fn render_to_docx(
    templates_dir: &Path,
    kind: TemplateKind,
    fields: &FieldMap,
    output: &Path,
) -> Result<(), RenderError> {
    let template = load_template(templates_dir, kind)?;
    let rendered = substitute(&template, fields);
    let bytes = build_docx(&rendered, &DocxStyles::default())?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, &bytes)?;
    debug!(
        template = kind.file_name(),
        output = %output.display(),
        bytes = bytes.len(),
        "document rendered"
    );
    Ok(())
}
