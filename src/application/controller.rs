// src/application/controller.rs
use tracing::{debug, error, info};

use crate::domain::{BookForm, BookRecord, DomainError};

/// Port to the book-tracking server. The server owns persistence,
/// identifier assignment, and search filtering; this client treats it as an
/// opaque collaborator.
pub trait BookApi {
    /// List all books, or let the server filter by a search query.
    fn list_books(&mut self, query: Option<&str>) -> Result<Vec<BookRecord>, DomainError>;

    fn create_book(&mut self, form: &BookForm) -> Result<(), DomainError>;

    fn update_book(&mut self, id: i64, form: &BookForm) -> Result<(), DomainError>;

    fn delete_book(&mut self, id: i64) -> Result<(), DomainError>;
}

/// Projection of the last list fetch. An empty collection renders as an
/// explicit placeholder, never an empty container.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Books(Vec<BookRecord>),
    Empty,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Update,
}

/// Stateful controller for the book list.
///
/// Holds the form model, the identifier of the record currently loaded for
/// editing (if any), and the last rendered view. All persistence goes
/// through the [`BookApi`] port; requests run sequentially with no retry.
pub struct BookListClient<A: BookApi> {
    api: A,
    form: BookForm,
    editing_id: Option<i64>,
    view: ListView,
}

impl<A: BookApi> BookListClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            form: BookForm::default(),
            editing_id: None,
            view: ListView::Empty,
        }
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn mode(&self) -> FormMode {
        match self.editing_id {
            Some(_) => FormMode::Update,
            None => FormMode::Create,
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Fetch and re-render the list, optionally letting the server filter
    /// by `query`.
    ///
    /// A transport or status failure degrades the view to an error
    /// placeholder instead of propagating; there is no caller above the
    /// triggering event to hand the error to.
    pub fn display_books(&mut self, query: Option<&str>) -> &ListView {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        match self.api.list_books(query) {
            Ok(books) if books.is_empty() => {
                debug!(?query, "List fetch returned no books");
                self.view = ListView::Empty;
            }
            Ok(books) => {
                debug!(count = books.len(), ?query, "List fetch succeeded");
                self.view = ListView::Books(books);
            }
            Err(e) => {
                error!(?query, error = %e, "Failed to fetch book list");
                self.view = ListView::Error(e.to_string());
            }
        }
        &self.view
    }

    /// Submit the form as a new record.
    ///
    /// Missing `title` or `author` (after trimming) aborts before any
    /// request. On success the form is cleared and the list refreshed; on a
    /// server error the form is left intact so the input can be corrected
    /// and resubmitted.
    pub fn submit_new_book(&mut self) -> Result<(), DomainError> {
        let payload = self.form.trimmed();
        payload.validate()?;

        self.api.create_book(&payload)?;
        info!(title = %payload.title, "Book created");
        self.clear_form();
        self.display_books(None);
        Ok(())
    }

    /// Load the record with `id` into the form for editing.
    ///
    /// Re-fetches the full collection and searches it client-side. The
    /// server offers no single-record endpoint, so this stays a linear scan
    /// over the whole list; tolerable for a small single-user collection.
    /// A record deleted by another session in the meantime surfaces as
    /// [`DomainError::BookNotFound`] with the form untouched.
    pub fn begin_edit(&mut self, id: i64) -> Result<(), DomainError> {
        let books = self.api.list_books(None)?;
        let record = books
            .iter()
            .find(|b| b.id == id)
            .ok_or(DomainError::BookNotFound(id))?;

        self.form.populate(record);
        self.editing_id = Some(id);
        debug!(id, "Loaded book into form for editing");
        Ok(())
    }

    /// Submit the form as an update to the record loaded by
    /// [`begin_edit`](Self::begin_edit).
    ///
    /// Returns `Ok(false)` without issuing any request when no record is
    /// being edited. On success the form (and with it the editing marker)
    /// is cleared and the list refreshed; on failure both are preserved.
    pub fn submit_update(&mut self) -> Result<bool, DomainError> {
        let Some(id) = self.editing_id else {
            debug!("submit_update called with no book being edited");
            return Ok(false);
        };

        let payload = self.form.trimmed();
        payload.validate()?;

        self.api.update_book(id, &payload)?;
        info!(id, "Book updated");
        self.clear_form();
        self.display_books(None);
        Ok(true)
    }

    /// Delete the record with `id` after asking `confirm`.
    ///
    /// Returns `Ok(false)` without issuing any request when the
    /// confirmation is declined. On success the list is refreshed; a failed
    /// request changes no local state.
    pub fn delete_book(
        &mut self,
        id: i64,
        confirm: impl FnOnce() -> bool,
    ) -> Result<bool, DomainError> {
        if !confirm() {
            debug!(id, "Delete not confirmed");
            return Ok(false);
        }

        self.api.delete_book(id)?;
        info!(id, "Book deleted");
        self.display_books(None);
        Ok(true)
    }

    /// Empty all form fields, drop the editing marker, and return to
    /// create mode.
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.editing_id = None;
    }
}
