// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("image is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },
    #[error("unsupported file type '{0}'")]
    UnsupportedFileType(String),
}
