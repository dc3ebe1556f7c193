//! Syntax highlighting for a loaded document (tree-sitter, parsed once).

mod keywords;
mod names;

use crate::kernel::document::Document;
use crate::kernel::language::LanguageId;
use tree_sitter::{Node, Parser, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    String,
    Regex,
    Keyword,
    Type,
    Number,
    Function,
    Macro,
    Constant,
    Attribute,
    Lifetime,
    Variable,
}

impl HighlightKind {
    /// Children of these nodes are not classified separately.
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::String | Self::Regex | Self::Attribute
        )
    }
}

/// Byte range within one line (relative to the line start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

pub struct SyntaxDocument {
    language: LanguageId,
    tree: Tree,
    line_starts: Vec<usize>,
    line_lens: Vec<usize>,
}

impl SyntaxDocument {
    pub fn for_document(document: &Document) -> Option<Self> {
        Self::parse(document.language(), document.lines())
    }

    pub fn parse(language: LanguageId, lines: &[String]) -> Option<Self> {
        let mut parser = new_parser(language)?;

        let mut line_starts = Vec::with_capacity(lines.len());
        let mut line_lens = Vec::with_capacity(lines.len());
        let mut offset = 0usize;
        for line in lines {
            line_starts.push(offset);
            line_lens.push(line.len());
            offset += line.len() + 1;
        }

        let text = lines.join("\n");
        let tree = parser.parse(&text, None)?;
        Some(Self {
            language,
            tree,
            line_starts,
            line_lens,
        })
    }

    pub fn highlight_lines(
        &self,
        start_line: usize,
        end_line_exclusive: usize,
    ) -> Vec<Vec<HighlightSpan>> {
        let total_lines = self.line_starts.len();
        let end_line_exclusive = end_line_exclusive.min(total_lines);
        if start_line >= end_line_exclusive {
            return Vec::new();
        }

        let range_start = self.line_starts[start_line];
        let last = end_line_exclusive - 1;
        let range_end = self.line_starts[last] + self.line_lens[last];

        let paint = self.paint(range_start, range_end);

        (start_line..end_line_exclusive)
            .map(|line| {
                let from = self.line_starts[line] - range_start;
                let to = from + self.line_lens[line];
                runs_to_spans(&paint[from..to])
            })
            .collect()
    }

    /// One slot per byte in `[start_byte, end_byte)`, holding the innermost classified
    /// node covering that byte.
    fn paint(&self, start_byte: usize, end_byte: usize) -> Vec<Option<HighlightKind>> {
        let mut paint = vec![None; end_byte.saturating_sub(start_byte)];
        let mut stack = vec![self.tree.root_node()];

        // Pre-order: parents paint first, children overwrite them.
        while let Some(node) = stack.pop() {
            let node_start = node.start_byte();
            let node_end = node.end_byte();
            if node_end <= start_byte || node_start >= end_byte {
                continue;
            }

            if let Some(kind) = classify_node(self.language, node) {
                let s = node_start.max(start_byte) - start_byte;
                let e = node_end.min(end_byte) - start_byte;
                paint[s..e].fill(Some(kind));
                if kind.is_leaf() {
                    continue;
                }
            }

            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }

        paint
    }
}

/// Highlights every line of `document`. Plain text (or a parser failure) yields no spans.
pub fn highlight_document(document: &Document) -> Vec<Vec<HighlightSpan>> {
    match SyntaxDocument::for_document(document) {
        Some(syntax) => syntax.highlight_lines(0, document.len()),
        None => vec![Vec::new(); document.len()],
    }
}

fn new_parser(language: LanguageId) -> Option<Parser> {
    let mut parser = Parser::new();
    match language {
        LanguageId::Rust => parser.set_language(tree_sitter_rust::language()).ok()?,
        LanguageId::Go => parser.set_language(tree_sitter_go::language()).ok()?,
        LanguageId::Python => parser.set_language(tree_sitter_python::language()).ok()?,
        LanguageId::C => parser.set_language(tree_sitter_c::language()).ok()?,
        LanguageId::Cpp => parser.set_language(tree_sitter_cpp::language()).ok()?,
        LanguageId::Java => parser.set_language(tree_sitter_java::language()).ok()?,
        LanguageId::JavaScript => parser
            .set_language(tree_sitter_javascript::language())
            .ok()?,
        LanguageId::TypeScript => parser
            .set_language(tree_sitter_typescript::language_typescript())
            .ok()?,
        LanguageId::Tsx => parser
            .set_language(tree_sitter_typescript::language_tsx())
            .ok()?,
        LanguageId::Json => parser.set_language(tree_sitter_json::language()).ok()?,
        LanguageId::Toml => parser.set_language(tree_sitter_toml::language()).ok()?,
        LanguageId::Bash => parser.set_language(tree_sitter_bash::language()).ok()?,
        LanguageId::PlainText => return None,
    }
    Some(parser)
}

fn runs_to_spans(paint: &[Option<HighlightKind>]) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for (i, slot) in paint.iter().enumerate() {
        let Some(kind) = *slot else {
            continue;
        };
        match spans.last_mut() {
            Some(prev) if prev.kind == kind && prev.end == i => prev.end = i + 1,
            _ => spans.push(HighlightSpan {
                start: i,
                end: i + 1,
                kind,
            }),
        }
    }
    spans
}

fn classify_node(language: LanguageId, node: Node<'_>) -> Option<HighlightKind> {
    let kind = node.kind();

    if kind.contains("comment") {
        return Some(HighlightKind::Comment);
    }
    if kind.contains("regex") {
        return Some(HighlightKind::Regex);
    }
    if kind.contains("string") || matches!(kind, "char_literal" | "byte_literal") {
        return Some(HighlightKind::String);
    }
    if kind.contains("integer") || kind.contains("float") || kind.contains("number") {
        return Some(HighlightKind::Number);
    }
    if matches!(kind, "primitive_type" | "predefined_type" | "type_identifier") {
        return Some(HighlightKind::Type);
    }
    if matches!(kind, "attribute_item" | "inner_attribute_item" | "decorator") {
        return Some(HighlightKind::Attribute);
    }
    if kind == "lifetime" {
        return Some(HighlightKind::Lifetime);
    }
    if let Some(kind) = names::classify(language, node) {
        return Some(kind);
    }
    if keywords::is_keyword(language, kind) {
        return Some(HighlightKind::Keyword);
    }
    None
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/syntax.rs"]
mod tests;
