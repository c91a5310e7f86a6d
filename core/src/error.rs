use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Construction-time failures. "No relevant result" is never an error: `search` returns `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("corpus is empty")]
    EmptyCorpus,
    #[error("document {index} is empty or whitespace-only")]
    BlankDocument { index: usize },
    #[error("relevance threshold must be finite and within [0, 1), got {0}")]
    InvalidThreshold(f64),
}
