// src/domain/mod.rs
pub mod book;
pub mod error;
pub mod form;

pub use book::BookRecord;
pub use error::DomainError;
pub use form::BookForm;
