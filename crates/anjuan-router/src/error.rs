use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    /// Operator-facing status text, shown verbatim.
    #[error("本人信息未填写")]
    MissingName,

    /// Witness and legal-entity interviews need the injured worker's name
    /// to locate or mint the case folder.
    #[error("受伤职工未填写")]
    MissingInjuredName,

    #[error("证人姓名未填写")]
    MissingWitnessName,

    #[error("case selection out of range: {0}")]
    InvalidSelection(usize),

    #[error("store error: {0}")]
    Store(#[from] anjuan_store::error::StoreError),

    #[error("render error: {0}")]
    Render(#[from] anjuan_render::error::RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
