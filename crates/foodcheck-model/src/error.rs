use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("page numbers start at 1, got {0}")]
    InvalidPage(u32),
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
