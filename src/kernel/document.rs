//! Read-only source document: the lines every other component indexes into.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::language::LanguageId;

#[derive(Debug)]
pub enum DocumentError {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound(path) => write!(f, "[Error] File not found: {}", path.display()),
            DocumentError::NotAFile(path) => write!(f, "[Error] Not a file: {}", path.display()),
            DocumentError::Io { path, source } => {
                write!(f, "[Error] Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    language: LanguageId,
}

impl Document {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let metadata = std::fs::metadata(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DocumentError::NotFound(path.to_path_buf()),
            _ => DocumentError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        })?;
        if !metadata.is_file() {
            return Err(DocumentError::NotAFile(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        tracing::info!(path = %path.display(), bytes = bytes.len(), "document loaded");
        Ok(Self::from_text(&text, path))
    }

    pub fn from_text(text: &str, path: &Path) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        Self::with_path(lines, LanguageId::from_path(path), path.to_path_buf())
    }

    pub fn from_lines<I, S>(lines: I, language: LanguageId) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines.into_iter().map(Into::into).collect();
        Self::with_path(lines, language, PathBuf::new())
    }

    fn with_path(mut lines: Vec<String>, language: LanguageId, path: PathBuf) -> Self {
        // An empty file still has one (empty) line to put the cursor on.
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            path,
            lines,
            language,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[untitled]".to_string())
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Never zero.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Lines `low..=high`, joined by `\n`. Out-of-range bounds are clamped.
    pub fn slice_text(&self, low: usize, high: usize) -> String {
        let last = self.lines.len() - 1;
        let high = high.min(last);
        let low = low.min(high);
        self.lines[low..=high].join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/document.rs"]
mod tests;
