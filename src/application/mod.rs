// src/application/mod.rs
pub mod controller;

pub use controller::{BookApi, BookListClient, FormMode, ListView};
