// src/domain/book.rs
use serde::{Deserialize, Serialize};

/// A single catalogued book entry as the server returns it.
///
/// The `id` is assigned by the server and immutable. Optional fields may
/// come back as JSON null, so they deserialize into `Option`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub subtitle: Option<String>,
    pub publisher: Option<String>,
    pub publication_date: Option<String>,
    pub read_date: Option<String>,
    pub review: Option<String>,
}
