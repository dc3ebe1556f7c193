//! Prompt construction for the explanation service. Pure and deterministic.

use super::document::Document;
use super::selection::LineRange;

/// Builds the instruction sent to the model: the whole file as context, then the selected
/// lines verbatim.
pub fn build_prompt(document: &Document, range: LineRange) -> String {
    let language = document.language().name();
    let full_text = document.text();
    let selected = document.slice_text(range.low, range.high);

    let mut prompt = String::with_capacity(full_text.len() + selected.len() + 256);
    prompt.push_str(
        "You are an expert programmer. Explain what the highlighted code does, in plain language, \
         using the rest of the file as context.\n\n",
    );
    prompt.push_str(&format!("Full file ({language}):\n```{language}\n"));
    prompt.push_str(&full_text);
    prompt.push_str("\n```\n\n");
    prompt.push_str(&format!("Highlighted lines {range}:\n```{language}\n"));
    prompt.push_str(&selected);
    prompt.push_str("\n```\n");
    prompt
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/prompt.rs"]
mod tests;
