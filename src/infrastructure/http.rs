// src/infrastructure/http.rs
use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::application::BookApi;
use crate::domain::{BookForm, BookRecord, DomainError};

const HTTP_USER_AGENT: &str = "booklog/0.3 (+https://github.com/sysid/booklog)";

/// Server port over the REST endpoints of the book-tracking server.
///
/// Requests are blocking and sequential; a stalled request is cut off by
/// the client-wide timeout and surfaces as a transport error. There is no
/// retry and no cancellation.
pub struct HttpBookApi {
    client: Client,
    base_url: String,
}

impl HttpBookApi {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(HTTP_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn list_url(&self, query: Option<&str>) -> String {
        match query {
            Some(q) => format!(
                "{}/api/search_books?q={}",
                self.base_url,
                urlencoding::encode(q)
            ),
            None => format!("{}/api/books", self.base_url),
        }
    }

    fn book_url(&self, id: i64) -> String {
        format!("{}/api/books/{}", self.base_url, id)
    }

    fn check(&self, response: Response) -> Result<Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(api_error(status, &body))
    }
}

impl BookApi for HttpBookApi {
    #[instrument(level = "debug", skip(self))]
    fn list_books(&mut self, query: Option<&str>) -> Result<Vec<BookRecord>, DomainError> {
        let url = self.list_url(query);
        debug!(%url, "Fetching book list");

        let response = self.client.get(&url).send().map_err(transport)?;
        self.check(response)?
            .json::<Vec<BookRecord>>()
            .map_err(transport)
    }

    #[instrument(level = "debug", skip(self, form))]
    fn create_book(&mut self, form: &BookForm) -> Result<(), DomainError> {
        let url = format!("{}/api/books", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(form)
            .send()
            .map_err(transport)?;
        self.check(response)?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self, form))]
    fn update_book(&mut self, id: i64, form: &BookForm) -> Result<(), DomainError> {
        let response = self
            .client
            .put(self.book_url(id))
            .json(form)
            .send()
            .map_err(transport)?;
        self.check(response)?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_book(&mut self, id: i64) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.book_url(id))
            .send()
            .map_err(transport)?;
        self.check(response)?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> DomainError {
    DomainError::Transport(e.to_string())
}

/// Map a non-2xx response to a domain error, preferring the server's
/// `error` field over a generic fallback.
fn api_error(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| "unknown server error".to_string());

    DomainError::Api {
        status: status.as_u16(),
        message,
    }
}
