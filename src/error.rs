use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("row length mismatch: expected {expected} cells, got {actual}")]
    RowLength { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
