use crate::kernel::language::LanguageId;

pub(super) fn is_keyword(language: LanguageId, kind: &str) -> bool {
    match language {
        LanguageId::Rust => is_rust_keyword(kind),
        LanguageId::Go => is_go_keyword(kind),
        LanguageId::Python => is_python_keyword(kind),
        LanguageId::JavaScript | LanguageId::TypeScript | LanguageId::Tsx => is_js_ts_keyword(kind),
        LanguageId::C => is_c_keyword(kind),
        LanguageId::Cpp => is_c_keyword(kind) || is_cpp_keyword(kind),
        LanguageId::Java => is_java_keyword(kind),
        LanguageId::Json => matches!(kind, "true" | "false" | "null"),
        LanguageId::Toml => matches!(kind, "true" | "false"),
        LanguageId::Bash => is_bash_keyword(kind),
        LanguageId::PlainText => false,
    }
}

fn is_rust_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "as" | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
    )
}

fn is_go_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "break"
            | "case"
            | "chan"
            | "const"
            | "continue"
            | "default"
            | "defer"
            | "else"
            | "fallthrough"
            | "for"
            | "func"
            | "go"
            | "goto"
            | "if"
            | "import"
            | "interface"
            | "map"
            | "package"
            | "range"
            | "return"
            | "select"
            | "struct"
            | "switch"
            | "type"
            | "true"
            | "false"
            | "nil"
            | "iota"
            | "var"
    )
}

fn is_python_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "False"
            | "None"
            | "True"
            | "and"
            | "as"
            | "assert"
            | "async"
            | "await"
            | "break"
            | "case"
            | "class"
            | "continue"
            | "def"
            | "del"
            | "elif"
            | "else"
            | "except"
            | "finally"
            | "for"
            | "from"
            | "global"
            | "if"
            | "import"
            | "in"
            | "is"
            | "lambda"
            | "match"
            | "nonlocal"
            | "not"
            | "or"
            | "pass"
            | "raise"
            | "return"
            | "try"
            | "while"
            | "with"
            | "yield"
            | "none"
            | "true"
            | "false"
    )
}

fn is_js_ts_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "async"
            | "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "export"
            | "extends"
            | "finally"
            | "for"
            | "from"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "interface"
            | "let"
            | "new"
            | "null"
            | "of"
            | "private"
            | "protected"
            | "public"
            | "readonly"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "try"
            | "type"
            | "typeof"
            | "undefined"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
            | "true"
            | "false"
    )
}

fn is_c_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "break"
            | "case"
            | "const"
            | "continue"
            | "default"
            | "do"
            | "else"
            | "enum"
            | "extern"
            | "for"
            | "goto"
            | "if"
            | "inline"
            | "return"
            | "sizeof"
            | "static"
            | "struct"
            | "switch"
            | "typedef"
            | "union"
            | "volatile"
            | "while"
            | "#include"
            | "#define"
            | "#ifdef"
            | "#ifndef"
            | "#if"
            | "#else"
            | "#endif"
            | "true"
            | "false"
            | "null"
    )
}

fn is_cpp_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "class"
            | "constexpr"
            | "delete"
            | "namespace"
            | "new"
            | "nullptr"
            | "operator"
            | "private"
            | "protected"
            | "public"
            | "template"
            | "this"
            | "throw"
            | "try"
            | "catch"
            | "typename"
            | "using"
            | "virtual"
            | "override"
    )
}

fn is_java_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "abstract"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "continue"
            | "default"
            | "do"
            | "else"
            | "enum"
            | "extends"
            | "final"
            | "finally"
            | "for"
            | "if"
            | "implements"
            | "import"
            | "instanceof"
            | "interface"
            | "new"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "throws"
            | "try"
            | "void"
            | "while"
            | "true"
            | "false"
            | "null"
    )
}

fn is_bash_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "if" | "then"
            | "else"
            | "elif"
            | "fi"
            | "case"
            | "esac"
            | "for"
            | "while"
            | "until"
            | "do"
            | "done"
            | "in"
            | "function"
            | "select"
            | "return"
            | "exit"
            | "local"
            | "declare"
            | "export"
            | "readonly"
            | "unset"
    )
}
