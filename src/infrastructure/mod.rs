// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod renderer;

pub use config::Config;
pub use http::HttpBookApi;
