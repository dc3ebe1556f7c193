use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    Tsx,
    C,
    Cpp,
    Java,
    Json,
    Toml,
    Bash,
    PlainText,
}

impl LanguageId {
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            return Self::PlainText;
        };
        match ext {
            "rs" => Self::Rust,
            "go" => Self::Go,
            "py" | "pyi" => Self::Python,
            "js" | "mjs" | "cjs" | "jsx" => Self::JavaScript,
            "ts" | "mts" | "cts" => Self::TypeScript,
            "tsx" => Self::Tsx,
            "c" => Self::C,
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" | "h" => Self::Cpp,
            "java" => Self::Java,
            "json" => Self::Json,
            "toml" => Self::Toml,
            "sh" | "bash" | "zsh" => Self::Bash,
            _ => Self::PlainText,
        }
    }

    /// Lowercase tag used in prompts and the header line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Bash => "bash",
            Self::PlainText => "text",
        }
    }

    pub fn is_plain_text(self) -> bool {
        self == Self::PlainText
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        Self::PlainText
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
