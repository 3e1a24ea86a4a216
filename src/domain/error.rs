// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Article not found: {0}")]
    ArticleNotFound(u64),
    #[error("Invalid page size: {0} (expected one of 5, 10, 15, 20)")]
    InvalidPageSize(u32),
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
