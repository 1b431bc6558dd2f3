use booklog::application::ListView;
use booklog::domain::BookRecord;
use booklog::ports::html::{EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER};
use booklog::ports::HtmlPresenter;
use rstest::rstest;

fn record(id: i64, title: &str, author: &str) -> BookRecord {
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
fn given_records_when_rendering_then_one_item_per_record() {
    let presenter = HtmlPresenter::new();
    let view = ListView::Books(vec![
        record(1, "Dune", "Frank Herbert"),
        record(2, "Emma", "Jane Austen"),
    ]);

    let html = presenter.render(&view);

    assert!(html.contains("<!DOCTYPE html>"));
    assert_eq!(html.matches("class=\"book-item\"").count(), 2);
    assert!(html.contains("Dune"));
    assert!(html.contains("Author: Jane Austen"));
}

#[test]
fn given_absent_optional_fields_when_rendering_then_their_lines_are_omitted() {
    let presenter = HtmlPresenter::new();
    let view = ListView::Books(vec![record(1, "Dune", "Frank Herbert")]);

    let html = presenter.render(&view);

    assert!(!html.contains("Publisher:"));
    assert!(!html.contains("Published:"));
    assert!(!html.contains("Read:"));
    assert!(!html.contains("Review:"));
}

#[test]
fn given_present_optional_fields_when_rendering_then_their_lines_appear() {
    let presenter = HtmlPresenter::new();
    let mut book = record(1, "Dune", "Frank Herbert");
    book.publisher = Some("Chilton Books".to_string());
    book.read_date = Some("2025-01-04".to_string());
    let view = ListView::Books(vec![book]);

    let html = presenter.render(&view);

    assert!(html.contains("Publisher: Chilton Books"));
    assert!(html.contains("Read: 2025-01-04"));
}

#[test]
fn given_empty_collection_when_rendering_then_placeholder_not_empty_container() {
    let presenter = HtmlPresenter::new();

    let html = presenter.render(&ListView::Empty);

    assert!(html.contains(EMPTY_PLACEHOLDER));
    assert!(!html.contains("book-item"));
}

#[test]
fn given_failed_fetch_when_rendering_then_error_placeholder_appears() {
    let presenter = HtmlPresenter::new();

    let html = presenter.render(&ListView::Error("connection refused".to_string()));

    assert!(html.contains(ERROR_PLACEHOLDER));
    assert!(!html.contains("book-item"));
}

#[test]
fn given_multiline_review_when_rendering_then_newlines_become_breaks() {
    let presenter = HtmlPresenter::new();
    let mut book = record(1, "Dune", "Frank Herbert");
    book.review = Some("Great start.\nSlow middle.".to_string());
    let view = ListView::Books(vec![book]);

    let html = presenter.render(&view);

    assert!(html.contains("Great start.<br>Slow middle."));
}

#[rstest]
#[case("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
#[case("Tom & Jerry", "Tom &amp; Jerry")]
fn given_markup_in_record_text_when_rendering_then_it_is_escaped(
    #[case] title: &str,
    #[case] expected: &str,
) {
    let presenter = HtmlPresenter::new();
    let view = ListView::Books(vec![record(1, title, "Anonymous")]);

    let html = presenter.render(&view);

    assert!(html.contains(expected));
    assert!(!html.contains(title));
}
