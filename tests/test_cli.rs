use booklog::cli::args::{Args, Command};
use clap::Parser;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["booklog", "42"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["booklog", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { query, json, open } => {
            assert_eq!(query, None);
            assert!(!json);
            assert!(!open);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.server, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_list_with_query_and_json_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["booklog", "list", "Tolkien", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { query, json, open } => {
            assert_eq!(query.as_deref(), Some("Tolkien"));
            assert!(json);
            assert!(!open);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_add_command_when_parsing_then_fields_are_captured() {
    // Arrange
    let args = vec![
        "booklog",
        "add",
        "--title",
        "Dune",
        "--author",
        "Frank Herbert",
        "--read-date",
        "2025-01-04",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add { fields } => {
            assert_eq!(fields.title.as_deref(), Some("Dune"));
            assert_eq!(fields.author.as_deref(), Some("Frank Herbert"));
            assert_eq!(fields.read_date.as_deref(), Some("2025-01-04"));
            assert_eq!(fields.subtitle, None);
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_add_without_fields_when_parsing_then_still_parses() {
    // Presence of title/author is the client's validation, not clap's, so
    // the message matches what the app would show in any entry path.
    let args = vec!["booklog", "add"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Add { fields } => assert_eq!(fields.title, None),
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_edit_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["booklog", "edit", "7", "--review", "Loved it"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit { book_id, fields } => {
            assert_eq!(book_id, 7);
            assert_eq!(fields.review.as_deref(), Some("Loved it"));
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["booklog", "delete", "7", "--yes"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { book_id, yes } => {
            assert_eq!(book_id, 7);
            assert!(yes);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_global_server_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["booklog", "-s", "http://books.example:8080", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.server.as_deref(), Some("http://books.example:8080"));
}

#[test]
fn given_verbose_flags_when_parsing_then_count_accumulates() {
    // Arrange
    let args = vec!["booklog", "-vv", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}
