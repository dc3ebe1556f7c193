use super::*;
use tempfile::tempdir;

#[test]
fn open_reads_lines_and_detects_language() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.rs");
    std::fs::write(&path, "fn main() {\r\n    run();\n}\n").unwrap();

    let document = Document::open(&path).unwrap();
    assert_eq!(document.lines(), &["fn main() {", "    run();", "}"]);
    assert_eq!(document.language(), LanguageId::Rust);
    assert_eq!(document.file_name(), "main.rs");
}

#[test]
fn open_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.py");

    let err = Document::open(&path).unwrap_err();
    assert!(matches!(err, DocumentError::NotFound(ref p) if p == &path));
    assert_eq!(
        err.to_string(),
        format!("[Error] File not found: {}", path.display())
    );
}

#[test]
fn open_directory_is_rejected() {
    let dir = tempdir().unwrap();
    let err = Document::open(dir.path()).unwrap_err();
    assert!(matches!(err, DocumentError::NotAFile(_)));
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, b"ok\n\xff\xfe\n").unwrap();

    let document = Document::open(&path).unwrap();
    assert_eq!(document.len(), 2);
    assert_eq!(document.line(0), Some("ok"));
    assert!(document.line(1).unwrap().contains('\u{FFFD}'));
}

#[test]
fn empty_file_has_one_empty_line() {
    let document = Document::from_text("", Path::new("empty.rs"));
    assert_eq!(document.len(), 1);
    assert_eq!(document.line(0), Some(""));
    assert!(!document.is_empty());
}

#[test]
fn slice_text_joins_inclusive_range_and_clamps() {
    let document = Document::from_lines(["a", "b", "c", "d"], LanguageId::PlainText);
    assert_eq!(document.slice_text(1, 2), "b\nc");
    assert_eq!(document.slice_text(3, 3), "d");
    assert_eq!(document.slice_text(2, 99), "c\nd");
    assert_eq!(document.text(), "a\nb\nc\nd");
}

#[test]
fn in_memory_document_has_placeholder_name() {
    let document = Document::from_lines(["x"], LanguageId::Go);
    assert_eq!(document.file_name(), "[untitled]");
    assert_eq!(document.language(), LanguageId::Go);
}
