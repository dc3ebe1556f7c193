use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub line_offset: usize,
    pub height: usize,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            line_offset: 0,
            height: 20,
        }
    }
}

impl ViewportState {
    pub fn new(height: usize) -> Self {
        Self {
            line_offset: 0,
            height,
        }
    }

    /// Scrolls the minimum amount so `cursor` is inside the window.
    pub fn follow_cursor(&mut self, cursor: usize, total_lines: usize) {
        let height = self.height.max(1);
        self.clamp(total_lines);

        if cursor < self.line_offset {
            self.line_offset = cursor;
        } else if cursor >= self.line_offset + height {
            self.line_offset = cursor.saturating_sub(height.saturating_sub(1));
        }
    }

    pub fn set_height(&mut self, height: usize, cursor: usize, total_lines: usize) {
        self.height = height.max(1);
        self.follow_cursor(cursor, total_lines);
    }

    pub fn visible_range(&self, total_lines: usize) -> std::ops::Range<usize> {
        let start = self.line_offset.min(total_lines);
        let end = (start + self.height.max(1)).min(total_lines);
        start..end
    }

    /// Lines moved by one page step.
    pub fn page_size(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }

    fn clamp(&mut self, total_lines: usize) {
        let max_offset = total_lines.max(1).saturating_sub(self.height.max(1));
        self.line_offset = self.line_offset.min(max_offset);
    }
}

pub fn expand_tabs(line: &str, tab_size: u8) -> String {
    let mut display_col = 0u32;
    expand_tabs_from(line, tab_size, &mut display_col)
}

/// Expands tabs starting at `display_col`, advancing it past the expanded text.
///
/// Used to expand highlighted segments of one line piece by piece while keeping tab stops
/// aligned to the whole line.
pub fn expand_tabs_from(text: &str, tab_size: u8, display_col: &mut u32) -> String {
    let mut expanded = String::with_capacity(text.len());
    let tab_size = tab_size.max(1) as u32;

    for ch in text.chars() {
        if ch == '\t' {
            let remainder = *display_col % tab_size;
            let spaces = if remainder == 0 {
                tab_size
            } else {
                tab_size - remainder
            };
            for _ in 0..spaces {
                expanded.push(' ');
            }
            *display_col += spaces;
        } else if ch == '\n' || ch == '\r' {
            break;
        } else {
            expanded.push(ch);
            *display_col += ch.width().unwrap_or(0) as u32;
        }
    }

    expanded
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/viewport.rs"]
mod tests;
