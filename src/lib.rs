// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{BookApi, BookListClient, ListView};
use crate::cli::args::{Args, BookFields, Command};
use crate::domain::BookForm;
use crate::infrastructure::renderer::PageRenderer;
use crate::infrastructure::{Config, HttpBookApi};
use crate::ports::html::{EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER};
use crate::ports::HtmlPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting booklog with arguments");

    // Initialize infrastructure
    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)?
        }
        None => Config::load_or_default()?,
    };
    let server_url = args.server.unwrap_or(config.server.url);
    debug!(%server_url, "Using server");

    let api = HttpBookApi::new(&server_url, config.server.timeout_secs)?;

    // Initialize application
    let mut client = BookListClient::new(api);

    // Execute use case
    match args.command {
        Command::List { query, json, open } => list_books(&mut client, query.as_deref(), json, open),
        Command::Add { fields } => add_book(&mut client, fields),
        Command::Edit { book_id, fields } => edit_book(&mut client, book_id, fields),
        Command::Delete { book_id, yes } => delete_book(&mut client, book_id, yes),
    }
}

fn list_books<A: BookApi>(
    client: &mut BookListClient<A>,
    query: Option<&str>,
    json: bool,
    open: bool,
) -> Result<()> {
    info!(?query, "Listing books");
    client.display_books(query);

    if json {
        print_json(client.view())?;
    } else if open {
        let presenter = HtmlPresenter::new();
        let html = presenter.render(client.view());

        let mut renderer = PageRenderer::new();
        let temp_path = renderer.create_temp_file(&html)?;
        renderer.open_in_browser(&temp_path)?;
    } else {
        print_list(client.view());
    }
    Ok(())
}

fn add_book<A: BookApi>(client: &mut BookListClient<A>, fields: BookFields) -> Result<()> {
    apply_fields(client.form_mut(), fields);

    client
        .submit_new_book()
        .context("Failed to add book")?;

    println!("Book added.");
    print_list(client.view());
    Ok(())
}

fn edit_book<A: BookApi>(
    client: &mut BookListClient<A>,
    book_id: i64,
    fields: BookFields,
) -> Result<()> {
    client
        .begin_edit(book_id)
        .context("Failed to load book for editing")?;

    // Only the flags given on the command line override the stored values.
    apply_fields(client.form_mut(), fields);

    client
        .submit_update()
        .with_context(|| format!("Failed to update book {}", book_id))?;

    println!("Book {} updated.", book_id);
    print_list(client.view());
    Ok(())
}

fn delete_book<A: BookApi>(client: &mut BookListClient<A>, book_id: i64, yes: bool) -> Result<()> {
    let confirmed = client
        .delete_book(book_id, || {
            yes || cli::confirm("Really delete this book?")
        })
        .with_context(|| format!("Failed to delete book {}", book_id))?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    println!("Book {} deleted.", book_id);
    print_list(client.view());
    Ok(())
}

fn apply_fields(form: &mut BookForm, fields: BookFields) {
    if let Some(v) = fields.title {
        form.title = v;
    }
    if let Some(v) = fields.subtitle {
        form.subtitle = v;
    }
    if let Some(v) = fields.author {
        form.author = v;
    }
    if let Some(v) = fields.publisher {
        form.publisher = v;
    }
    if let Some(v) = fields.publication_date {
        form.publication_date = v;
    }
    if let Some(v) = fields.read_date {
        form.read_date = v;
    }
    if let Some(v) = fields.review {
        form.review = v;
    }
}

fn print_list(view: &ListView) {
    match view {
        ListView::Books(books) => {
            for book in books {
                let read = book.read_date.as_deref().unwrap_or("-");
                println!("{:>5}  {}  by {}  (read: {})", book.id, book.title, book.author, read);
            }
        }
        ListView::Empty => println!("{}", EMPTY_PLACEHOLDER),
        ListView::Error(message) => {
            // The fetch already logged the details; the list view itself
            // degrades to a placeholder.
            println!("{} ({})", ERROR_PLACEHOLDER, message);
        }
    }
}

fn print_json(view: &ListView) -> Result<()> {
    let json = match view {
        ListView::Books(books) => serde_json::to_string_pretty(books)?,
        ListView::Empty => "[]".to_string(),
        ListView::Error(message) => {
            serde_json::to_string_pretty(&serde_json::json!({ "error": message }))?
        }
    };
    println!("{}", json);
    Ok(())
}
