use crate::{book, category, tag, ModuleType};

#[test]
fn title_rules() {
    assert!(book::validate_title("Programming Rust").is_ok());
    assert!(book::validate_title("  ").is_err());
    assert!(book::validate_title(&"x".repeat(129)).is_err());
}

#[test]
fn author_and_cover_rules() {
    assert!(book::validate_author("Jim Blandy").is_ok());
    assert!(book::validate_author(&"a".repeat(65)).is_err());
    assert!(book::validate_cover(None).is_ok());
    assert!(book::validate_cover(Some("https://img.example.com/a.png")).is_ok());
    assert!(book::validate_cover(Some("/static/cover.png")).is_ok());
    assert!(book::validate_cover(Some("ftp://x")).is_err());
}

#[test]
fn category_path_parsing() {
    assert_eq!(book::parse_category_path("5").unwrap(), vec![5]);
    assert_eq!(book::parse_category_path("1, 5").unwrap(), vec![1, 5]);
    assert!(book::parse_category_path("").is_err());
    assert!(book::parse_category_path("1,,5").is_err());
    assert!(book::parse_category_path("1,x").is_err());
}

#[test]
fn tag_name_normalization() {
    assert_eq!(tag::normalize_name("  rust ").unwrap(), "rust");
    assert!(tag::normalize_name("").is_err());
    assert!(tag::normalize_name(&"t".repeat(tag::MAX_NAME_LEN + 1)).is_err());
    assert!(tag::normalize_name(&"t".repeat(tag::MAX_NAME_LEN)).is_ok());
}

#[test]
fn category_name_rules() {
    assert!(category::validate_name("Rust").is_ok());
    assert!(category::validate_name("").is_err());
}

#[test]
fn module_type_display() {
    assert_eq!(ModuleType::Book.to_string(), "book");
    assert_eq!(ModuleType::BookNote.as_str(), "book_note");
}
