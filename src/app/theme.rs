//! Viewer colors, in one place instead of scattered through rendering.

use crate::kernel::syntax::HighlightKind;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub gutter_fg: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
    pub muted_fg: Color,
    pub overlay_border: Color,
    pub error_fg: Color,
    pub syntax_comment_fg: Color,
    pub syntax_keyword_fg: Color,
    pub syntax_string_fg: Color,
    pub syntax_number_fg: Color,
    pub syntax_type_fg: Color,
    pub syntax_attribute_fg: Color,
    pub syntax_function_fg: Color,
    pub syntax_variable_fg: Color,
    pub syntax_constant_fg: Color,
    pub syntax_regex_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("CODE_XRAY_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    color_support_from(&colorterm, &term)
}

fn color_support_from(colorterm: &str, term: &str) -> TerminalColorSupport {
    let truecolor = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if truecolor(colorterm) || truecolor(term) {
        TerminalColorSupport::TrueColor
    } else if term.contains("256color") {
        TerminalColorSupport::Ansi256
    } else {
        TerminalColorSupport::Ansi16
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Indexed(6), // Cyan
            header_bg: Color::Reset,
            gutter_fg: Color::Indexed(8), // DarkGray
            footer_fg: Color::Indexed(15),
            footer_bg: Color::Indexed(8),
            muted_fg: Color::Indexed(8),
            overlay_border: Color::Indexed(6),
            error_fg: Color::Indexed(1), // Red
            syntax_comment_fg: Color::Rgb(0x6A, 0x99, 0x55),
            syntax_keyword_fg: Color::Rgb(0x56, 0x9C, 0xD6),
            syntax_string_fg: Color::Rgb(0xCE, 0x91, 0x78),
            syntax_number_fg: Color::Rgb(0xB5, 0xCE, 0xA8),
            syntax_type_fg: Color::Rgb(0x4E, 0xC9, 0xB0),
            syntax_attribute_fg: Color::Rgb(0x4E, 0xC9, 0xB0),
            syntax_function_fg: Color::Rgb(0xDC, 0xDC, 0xAA),
            syntax_variable_fg: Color::Rgb(0x9C, 0xDC, 0xFE),
            syntax_constant_fg: Color::Rgb(0x4F, 0xC1, 0xFF),
            syntax_regex_fg: Color::Rgb(0xD1, 0x69, 0x69),
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        let pick = |ansi256: u8, ansi16: u8| match support {
            TerminalColorSupport::TrueColor => None,
            TerminalColorSupport::Ansi256 => Some(Color::Indexed(ansi256)),
            TerminalColorSupport::Ansi16 => Some(Color::Indexed(ansi16)),
        };

        let palette = [
            (&mut self.syntax_comment_fg, pick(65, 2)),
            (&mut self.syntax_keyword_fg, pick(33, 4)),
            (&mut self.syntax_string_fg, pick(173, 3)),
            (&mut self.syntax_number_fg, pick(151, 10)),
            (&mut self.syntax_type_fg, pick(43, 6)),
            (&mut self.syntax_attribute_fg, pick(43, 6)),
            (&mut self.syntax_function_fg, pick(187, 11)),
            (&mut self.syntax_variable_fg, pick(153, 14)),
            (&mut self.syntax_constant_fg, pick(39, 12)),
            (&mut self.syntax_regex_fg, pick(167, 9)),
        ];
        for (slot, color) in palette {
            if let Some(color) = color {
                *slot = color;
            }
        }
    }

    pub fn syntax_style(&self, kind: HighlightKind) -> Style {
        let fg = match kind {
            HighlightKind::Comment => self.syntax_comment_fg,
            HighlightKind::String => self.syntax_string_fg,
            HighlightKind::Regex => self.syntax_regex_fg,
            HighlightKind::Keyword => self.syntax_keyword_fg,
            HighlightKind::Type => self.syntax_type_fg,
            HighlightKind::Number => self.syntax_number_fg,
            HighlightKind::Function => self.syntax_function_fg,
            HighlightKind::Macro => self.syntax_keyword_fg,
            HighlightKind::Constant => self.syntax_constant_fg,
            HighlightKind::Attribute => self.syntax_attribute_fg,
            HighlightKind::Lifetime => self.syntax_keyword_fg,
            HighlightKind::Variable => self.syntax_variable_fg,
        };
        let style = Style::default().fg(fg);
        if kind == HighlightKind::Comment {
            style.add_modifier(Modifier::ITALIC)
        } else {
            style
        }
    }

    /// Applied on top of syntax colors for lines inside the selection.
    pub fn selected_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
