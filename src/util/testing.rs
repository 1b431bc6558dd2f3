// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::BookApi;
use crate::domain::{BookForm, BookRecord, DomainError};

/// Every request the mock saw, in order. Lets tests assert that an aborted
/// action issued no request at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List(Option<String>),
    Create,
    Update(i64),
    Delete(i64),
}

enum DeleteBehavior {
    Success,
    NotFound,
}

/// Shared mock server port for testing the controller.
///
/// Behaves like the real server by default: `create_book` appends a record
/// with the next id, `update_book` rewrites the matching record, and a list
/// query filters case-insensitively over title, author, and review.
/// Individual operations can be forced to fail through the builder.
///
/// # Examples
///
/// ```
/// use booklog::util::testing::MockBookApi;
/// use booklog::domain::BookRecord;
///
/// let mock = MockBookApi::builder()
///     .with_book(BookRecord {
///         id: 1,
///         title: "Dune".to_string(),
///         author: "Frank Herbert".to_string(),
///         subtitle: None,
///         publisher: None,
///         publication_date: None,
///         read_date: None,
///         review: None,
///     })
///     .with_delete_not_found(999)
///     .build();
/// ```
pub struct MockBookApi {
    books: Vec<BookRecord>,
    next_id: i64,
    list_error: Option<String>,
    create_error: Option<(u16, String)>,
    update_error: Option<(u16, String)>,
    delete_behaviors: HashMap<i64, DeleteBehavior>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl MockBookApi {
    pub fn builder() -> MockBookApiBuilder {
        MockBookApiBuilder::new()
    }

    /// Handle to the request log; clone it out before the mock moves into
    /// the controller.
    pub fn call_log(&self) -> Arc<Mutex<Vec<ApiCall>>> {
        Arc::clone(&self.calls)
    }

    fn matches(book: &BookRecord, query: &str) -> bool {
        let q = query.to_lowercase();
        book.title.to_lowercase().contains(&q)
            || book.author.to_lowercase().contains(&q)
            || book
                .review
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(&q))
    }
}

impl BookApi for MockBookApi {
    fn list_books(&mut self, query: Option<&str>) -> Result<Vec<BookRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::List(query.map(str::to_string)));

        if let Some(message) = &self.list_error {
            return Err(DomainError::Transport(message.clone()));
        }

        Ok(match query {
            None => self.books.clone(),
            Some(q) => self
                .books
                .iter()
                .filter(|b| Self::matches(b, q))
                .cloned()
                .collect(),
        })
    }

    fn create_book(&mut self, form: &BookForm) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(ApiCall::Create);

        if let Some((status, message)) = &self.create_error {
            return Err(DomainError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.books.push(record_from_form(id, form));
        Ok(())
    }

    fn update_book(&mut self, id: i64, form: &BookForm) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(ApiCall::Update(id));

        if let Some((status, message)) = &self.update_error {
            return Err(DomainError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                *book = record_from_form(id, form);
                Ok(())
            }
            None => Err(DomainError::BookNotFound(id)),
        }
    }

    fn delete_book(&mut self, id: i64) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(ApiCall::Delete(id));

        match self.delete_behaviors.get(&id) {
            Some(DeleteBehavior::NotFound) => Err(DomainError::BookNotFound(id)),
            Some(DeleteBehavior::Success) | None => {
                self.books.retain(|b| b.id != id);
                Ok(())
            }
        }
    }
}

fn record_from_form(id: i64, form: &BookForm) -> BookRecord {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
    BookRecord {
        id,
        title: form.title.clone(),
        author: form.author.clone(),
        subtitle: opt(&form.subtitle),
        publisher: opt(&form.publisher),
        publication_date: opt(&form.publication_date),
        read_date: opt(&form.read_date),
        review: opt(&form.review),
    }
}

/// Builder for MockBookApi
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockBookApiBuilder {
    books: Vec<BookRecord>,
    list_error: Option<String>,
    create_error: Option<(u16, String)>,
    update_error: Option<(u16, String)>,
    delete_behaviors: HashMap<i64, DeleteBehavior>,
}

impl MockBookApiBuilder {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            list_error: None,
            create_error: None,
            update_error: None,
            delete_behaviors: HashMap::new(),
        }
    }

    /// Seed the mock collection with a record.
    pub fn with_book(mut self, book: BookRecord) -> Self {
        self.books.push(book);
        self
    }

    /// Make every list fetch fail with a transport error.
    pub fn with_list_error(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    /// Make create_book fail with a server error.
    pub fn with_create_error(mut self, status: u16, message: &str) -> Self {
        self.create_error = Some((status, message.to_string()));
        self
    }

    /// Make update_book fail with a server error.
    pub fn with_update_error(mut self, status: u16, message: &str) -> Self {
        self.update_error = Some((status, message.to_string()));
        self
    }

    /// Configure delete_book to succeed for a specific id.
    pub fn with_delete_success(mut self, id: i64) -> Self {
        self.delete_behaviors.insert(id, DeleteBehavior::Success);
        self
    }

    /// Configure delete_book to fail with NotFound for a specific id.
    pub fn with_delete_not_found(mut self, id: i64) -> Self {
        self.delete_behaviors.insert(id, DeleteBehavior::NotFound);
        self
    }

    pub fn build(self) -> MockBookApi {
        let next_id = self.books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        MockBookApi {
            books: self.books,
            next_id,
            list_error: self.list_error,
            create_error: self.create_error,
            update_error: self.update_error,
            delete_behaviors: self.delete_behaviors,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockBookApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    fn sample_book(id: i64, title: &str, author: &str) -> BookRecord {
        BookRecord {
            id,
            title: title.to_string(),
            author: author.to_string(),
            subtitle: None,
            publisher: None,
            publication_date: None,
            read_date: None,
            review: None,
        }
    }

    #[test]
    fn given_seeded_books_when_listing_all_then_returns_all() {
        let mut mock = MockBookApi::builder()
            .with_book(sample_book(1, "Dune", "Frank Herbert"))
            .with_book(sample_book(2, "The Hobbit", "J.R.R. Tolkien"))
            .build();

        let result = mock.list_books(None).expect("List should succeed");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn given_query_when_listing_then_filters_case_insensitively() {
        let mut mock = MockBookApi::builder()
            .with_book(sample_book(1, "Dune", "Frank Herbert"))
            .with_book(sample_book(2, "The Hobbit", "J.R.R. Tolkien"))
            .build();

        let result = mock
            .list_books(Some("tolkien"))
            .expect("List should succeed");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn given_form_when_creating_then_appends_with_next_id() {
        let mut mock = MockBookApi::builder()
            .with_book(sample_book(5, "Dune", "Frank Herbert"))
            .build();
        let form = BookForm {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            ..Default::default()
        };

        mock.create_book(&form).expect("Create should succeed");

        let books = mock.list_books(None).expect("List should succeed");
        assert_eq!(books.len(), 2);
        assert_eq!(books[1].id, 6);
        assert_eq!(books[1].title, "Emma");
    }

    #[test]
    fn given_delete_not_found_configured_when_deleting_then_returns_error() {
        let mut mock = MockBookApi::builder().with_delete_not_found(42).build();

        let result = mock.delete_book(42);
        assert!(matches!(result, Err(DomainError::BookNotFound(42))));
    }

    #[test]
    fn given_requests_when_made_then_call_log_records_them_in_order() {
        let mut mock = MockBookApi::builder().build();
        let calls = mock.call_log();

        mock.list_books(Some("q")).expect("List should succeed");
        mock.delete_book(3).expect("Delete should succeed");

        let log = calls.lock().unwrap();
        assert_eq!(
            *log,
            vec![ApiCall::List(Some("q".to_string())), ApiCall::Delete(3)]
        );
    }
}
