// src/domain/form.rs
use serde::Serialize;

use crate::domain::{BookRecord, DomainError};

/// In-memory form model for create/update input.
///
/// This is the single source of truth for pending input; rendered views are
/// projections of it, never read back. Serializes to the request body the
/// server expects: all seven fields present, unset optionals as empty
/// strings.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub publisher: String,
    pub publication_date: String,
    pub read_date: String,
    pub review: String,
}

impl BookForm {
    /// Empty all seven fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fill every field from a record, absent optionals becoming empty
    /// strings.
    pub fn populate(&mut self, record: &BookRecord) {
        self.title = record.title.clone();
        self.subtitle = record.subtitle.clone().unwrap_or_default();
        self.author = record.author.clone();
        self.publisher = record.publisher.clone().unwrap_or_default();
        self.publication_date = record.publication_date.clone().unwrap_or_default();
        self.read_date = record.read_date.clone().unwrap_or_default();
        self.review = record.review.clone().unwrap_or_default();
    }

    /// Copy with surrounding whitespace stripped from the free-text fields.
    /// Date fields pass through untouched.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            author: self.author.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            publication_date: self.publication_date.clone(),
            read_date: self.read_date.clone(),
            review: self.review.trim().to_string(),
        }
    }

    /// Presence check on the two required fields. All further validation is
    /// the server's responsibility.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        if self.author.trim().is_empty() {
            return Err(DomainError::MissingField("author"));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
