use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Operator-facing: the status line shows this text verbatim.
    #[error("模板文件不存在: {0}")]
    TemplateNotFound(String),

    #[error("template read failed: {0}")]
    TemplateRead(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
