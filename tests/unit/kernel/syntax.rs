use super::*;

fn rust(lines: &[&str]) -> Vec<Vec<HighlightSpan>> {
    let document = Document::from_lines(lines.iter().copied(), LanguageId::Rust);
    highlight_document(&document)
}

fn kind_at(spans: &[HighlightSpan], byte: usize) -> Option<HighlightKind> {
    spans
        .iter()
        .find(|span| span.start <= byte && byte < span.end)
        .map(|span| span.kind)
}

#[test]
fn rust_keywords_and_function_names() {
    let highlights = rust(&["fn main() {", "    let total = add(1, 2);", "}"]);
    assert_eq!(highlights.len(), 3);

    let first = &highlights[0];
    assert_eq!(kind_at(first, 0), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(first, 3), Some(HighlightKind::Function));
    assert_eq!(kind_at(first, 2), None);

    let second = &highlights[1];
    assert_eq!(kind_at(second, 4), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(second, 16), Some(HighlightKind::Function));
    assert_eq!(kind_at(second, 20), Some(HighlightKind::Number));
}

#[test]
fn comments_and_strings_are_single_spans() {
    let highlights = rust(&["// say \"hi\"", "const S: &str = \"a // b\";"]);

    assert_eq!(
        highlights[0],
        vec![HighlightSpan {
            start: 0,
            end: 11,
            kind: HighlightKind::Comment,
        }]
    );
    let string = highlights[1]
        .iter()
        .find(|span| span.kind == HighlightKind::String)
        .copied();
    assert_eq!(
        string,
        Some(HighlightSpan {
            start: 16,
            end: 24,
            kind: HighlightKind::String,
        })
    );
}

#[test]
fn spans_are_sorted_and_disjoint() {
    let highlights = rust(&[
        "#[derive(Debug)]",
        "struct Point<'a> { name: &'a str, x: i32 }",
        "const MAX: u8 = 3;",
        "fn f() { println!(\"{}\", MAX); }",
    ]);
    for spans in &highlights {
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for span in spans {
            assert!(span.start < span.end);
        }
    }

    assert_eq!(kind_at(&highlights[0], 0), Some(HighlightKind::Attribute));
    assert_eq!(kind_at(&highlights[1], 13), Some(HighlightKind::Lifetime));
    assert_eq!(kind_at(&highlights[1], 38), Some(HighlightKind::Type));
    assert_eq!(kind_at(&highlights[3], 9), Some(HighlightKind::Macro));
}

#[test]
fn multi_line_comment_covers_every_line() {
    let highlights = rust(&["/* one", "two */ fn x() {}"]);
    assert_eq!(kind_at(&highlights[0], 0), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&highlights[1], 0), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&highlights[1], 7), Some(HighlightKind::Keyword));
}

#[test]
fn python_definitions() {
    let document = Document::from_lines(["def greet(name):", "    return name"], LanguageId::Python);
    let highlights = highlight_document(&document);
    assert_eq!(kind_at(&highlights[0], 0), Some(HighlightKind::Keyword));
    assert_eq!(kind_at(&highlights[0], 4), Some(HighlightKind::Function));
    assert_eq!(kind_at(&highlights[1], 4), Some(HighlightKind::Keyword));
}

#[test]
fn plain_text_has_no_spans() {
    let document = Document::from_lines(["fn main() {}", "// nope"], LanguageId::PlainText);
    assert!(SyntaxDocument::for_document(&document).is_none());
    assert_eq!(highlight_document(&document), vec![Vec::new(), Vec::new()]);
}

#[test]
fn highlight_lines_clamps_range() {
    let lines: Vec<String> = vec!["let a = 1;".to_string(), "let b = 2;".to_string()];
    let syntax = SyntaxDocument::parse(LanguageId::Rust, &lines).unwrap();
    assert_eq!(syntax.highlight_lines(1, 10).len(), 1);
    assert!(syntax.highlight_lines(5, 10).is_empty());
}
