// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Book not found: {0}")]
    BookNotFound(i64),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Request failed: {0}")]
    Transport(String),
}
