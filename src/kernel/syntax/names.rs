//! Identifier classification: definitions and call sites.

use crate::kernel::language::LanguageId;
use tree_sitter::Node;

use super::HighlightKind;

pub(super) fn classify(language: LanguageId, node: Node<'_>) -> Option<HighlightKind> {
    match language {
        LanguageId::Rust => classify_rust(node),
        LanguageId::Go => classify_go(node),
        LanguageId::Python => classify_python(node),
        LanguageId::JavaScript | LanguageId::TypeScript | LanguageId::Tsx => classify_js(node),
        LanguageId::C | LanguageId::Cpp => classify_c(node),
        LanguageId::Java => classify_java(node),
        LanguageId::Json | LanguageId::Toml | LanguageId::Bash | LanguageId::PlainText => None,
    }
}

fn classify_rust(node: Node<'_>) -> Option<HighlightKind> {
    match node.kind() {
        "identifier" => {
            let parent = node.parent()?;
            match parent.kind() {
                "function_item" | "function_signature_item" if is_field(parent, "name", node) => {
                    Some(HighlightKind::Function)
                }
                "call_expression" if is_field(parent, "function", node) => {
                    Some(HighlightKind::Function)
                }
                "macro_invocation" if is_field(parent, "macro", node) => {
                    Some(HighlightKind::Macro)
                }
                "const_item" | "static_item" if is_field(parent, "name", node) => {
                    Some(HighlightKind::Constant)
                }
                "parameter" | "closure_parameters" => Some(HighlightKind::Variable),
                // `Foo::new()`: only the trailing name is the function.
                "scoped_identifier" if is_field(parent, "name", node) && is_callee(parent) => {
                    Some(HighlightKind::Function)
                }
                _ => None,
            }
        }
        "field_identifier" => {
            let parent = node.parent()?;
            (parent.kind() == "field_expression" && is_callee(parent))
                .then_some(HighlightKind::Function)
        }
        _ => None,
    }
}

fn classify_go(node: Node<'_>) -> Option<HighlightKind> {
    let parent = node.parent()?;
    match (node.kind(), parent.kind()) {
        ("identifier", "function_declaration") if is_field(parent, "name", node) => {
            Some(HighlightKind::Function)
        }
        ("field_identifier", "method_declaration") if is_field(parent, "name", node) => {
            Some(HighlightKind::Function)
        }
        ("identifier", "call_expression") if is_field(parent, "function", node) => {
            Some(HighlightKind::Function)
        }
        ("field_identifier", "selector_expression") if is_callee(parent) => {
            Some(HighlightKind::Function)
        }
        ("package_identifier", _) => Some(HighlightKind::Attribute),
        _ => None,
    }
}

fn classify_python(node: Node<'_>) -> Option<HighlightKind> {
    if node.kind() != "identifier" {
        return None;
    }
    let parent = node.parent()?;
    match parent.kind() {
        "function_definition" if is_field(parent, "name", node) => Some(HighlightKind::Function),
        "class_definition" if is_field(parent, "name", node) => Some(HighlightKind::Type),
        "call" if is_field(parent, "function", node) => Some(HighlightKind::Function),
        "attribute" if is_field(parent, "attribute", node) && is_python_callee(parent) => {
            Some(HighlightKind::Function)
        }
        "parameters" | "default_parameter" | "typed_parameter" => Some(HighlightKind::Variable),
        _ => None,
    }
}

fn is_python_callee(node: Node<'_>) -> bool {
    node.parent()
        .is_some_and(|call| call.kind() == "call" && is_field(call, "function", node))
}

fn classify_js(node: Node<'_>) -> Option<HighlightKind> {
    let parent = node.parent()?;
    match (node.kind(), parent.kind()) {
        (
            "identifier",
            "function_declaration" | "function" | "generator_function_declaration",
        ) if is_field(parent, "name", node) => Some(HighlightKind::Function),
        ("property_identifier", "method_definition") if is_field(parent, "name", node) => {
            Some(HighlightKind::Function)
        }
        ("identifier", "call_expression") if is_field(parent, "function", node) => {
            Some(HighlightKind::Function)
        }
        ("property_identifier", "member_expression") if is_callee(parent) => {
            Some(HighlightKind::Function)
        }
        ("identifier", "class_declaration" | "class") if is_field(parent, "name", node) => {
            Some(HighlightKind::Type)
        }
        _ => None,
    }
}

fn classify_c(node: Node<'_>) -> Option<HighlightKind> {
    let parent = node.parent()?;
    match (node.kind(), parent.kind()) {
        ("identifier", "function_declarator") if is_field(parent, "declarator", node) => {
            Some(HighlightKind::Function)
        }
        ("identifier", "call_expression") if is_field(parent, "function", node) => {
            Some(HighlightKind::Function)
        }
        ("preproc_arg", _) => Some(HighlightKind::Macro),
        _ => None,
    }
}

fn classify_java(node: Node<'_>) -> Option<HighlightKind> {
    if node.kind() != "identifier" {
        return None;
    }
    let parent = node.parent()?;
    match parent.kind() {
        "method_declaration" | "constructor_declaration" if is_field(parent, "name", node) => {
            Some(HighlightKind::Function)
        }
        "method_invocation" if is_field(parent, "name", node) => Some(HighlightKind::Function),
        "class_declaration" | "interface_declaration" | "enum_declaration"
            if is_field(parent, "name", node) =>
        {
            Some(HighlightKind::Type)
        }
        _ => None,
    }
}

/// True when `node` is the callee of its parent call expression.
fn is_callee(node: Node<'_>) -> bool {
    node.parent().is_some_and(|call| {
        call.kind() == "call_expression" && is_field(call, "function", node)
    })
}

fn is_field(parent: Node<'_>, field_name: &str, node: Node<'_>) -> bool {
    parent.child_by_field_name(field_name).is_some_and(|field| {
        field.start_byte() == node.start_byte() && field.end_byte() == node.end_byte()
    })
}
