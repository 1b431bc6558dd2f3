// src/ports/html.rs
use html_escape::encode_text;

use crate::application::ListView;
use crate::domain::BookRecord;

pub const EMPTY_PLACEHOLDER: &str = "No books found.";
pub const ERROR_PLACEHOLDER: &str = "Failed to load books.";

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Render one list item. Optional fields only get a line when present;
    /// review newlines become `<br>`. All record text is escaped before
    /// interpolation, unlike the original page, which trusted server
    /// content verbatim.
    fn render_book(&self, book: &BookRecord) -> String {
        let mut item = String::new();
        item.push_str(&format!(
            "        <div class=\"book-item\" data-book-id=\"{}\">\n",
            book.id
        ));
        item.push_str(&format!("            <h3>{}</h3>\n", encode_text(&book.title)));
        if let Some(subtitle) = non_empty(&book.subtitle) {
            item.push_str(&format!(
                "            <p class=\"subtitle\">{}</p>\n",
                encode_text(subtitle)
            ));
        }
        item.push_str(&format!(
            "            <p>Author: {}</p>\n",
            encode_text(&book.author)
        ));
        if let Some(publisher) = non_empty(&book.publisher) {
            item.push_str(&format!(
                "            <p>Publisher: {}</p>\n",
                encode_text(publisher)
            ));
        }
        if let Some(date) = non_empty(&book.publication_date) {
            item.push_str(&format!(
                "            <p>Published: {}</p>\n",
                encode_text(date)
            ));
        }
        if let Some(date) = non_empty(&book.read_date) {
            item.push_str(&format!("            <p>Read: {}</p>\n", encode_text(date)));
        }
        if let Some(review) = non_empty(&book.review) {
            let review_html = encode_text(review).replace('\n', "<br>");
            item.push_str(&format!(
                "            <p class=\"review-text\">Review:<br>{}</p>\n",
                review_html
            ));
        }
        item.push_str("        </div>\n");
        item
    }

    fn render_body(&self, view: &ListView) -> String {
        match view {
            ListView::Books(books) => books.iter().map(|b| self.render_book(b)).collect(),
            ListView::Empty => format!("        <p>{}</p>\n", EMPTY_PLACEHOLDER),
            ListView::Error(_) => format!("        <p class=\"error\">{}</p>\n", ERROR_PLACEHOLDER),
        }
    }

    pub fn render(&self, view: &ListView) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>My Books</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .book-item {{
            background: white;
            border-radius: 8px;
            padding: 1.5rem;
            margin-bottom: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .book-item h3 {{
            margin-top: 0;
        }}
        .subtitle {{
            color: #666;
            font-style: italic;
        }}
        .review-text {{
            border-top: 1px solid #eee;
            padding-top: 0.5rem;
            white-space: normal;
        }}
        .error {{
            color: #b00020;
        }}
    </style>
</head>
<body>
    <h1>My Books</h1>
    <div id="booksContainer">
{body}    </div>
</body>
</html>"#,
            body = self.render_body(view)
        )
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
