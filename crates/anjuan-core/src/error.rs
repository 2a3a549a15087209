use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown case type: {0}")]
    InvalidCaseType(String),

    #[error("unknown person type: {0}")]
    InvalidPersonType(String),
}
