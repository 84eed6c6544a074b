use thiserror::Error;

/// Errors raised while parsing symbolic names found in step descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),
    #[error("unknown sort field code {0}")]
    UnknownSortFieldCode(i32),
    #[error("unknown sort order '{0}'")]
    UnknownSortOrder(String),
    #[error("unknown sort order code {0}")]
    UnknownSortOrderCode(i32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
