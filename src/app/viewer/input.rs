use super::Viewer;
use crate::core::event::{InputEvent, Key, KeyEventKind, MouseEventKind};
use crate::core::view::EventResult;
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::OverlayView;
use unicode_width::UnicodeWidthStr;

const MOUSE_SCROLL_LINES: isize = 3;

pub(super) fn handle_input(viewer: &mut Viewer, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return EventResult::Ignored;
            }
            let key = Key::from(*key);
            let context = if viewer.overlay.is_empty() {
                KeybindingContext::Viewer
            } else {
                KeybindingContext::Overlay
            };
            match viewer.keybindings.resolve(context, &key).cloned() {
                Some(command) => viewer.execute(command),
                None => EventResult::Ignored,
            }
        }
        InputEvent::Mouse(mouse) => {
            let delta = match mouse.kind {
                MouseEventKind::ScrollUp => -MOUSE_SCROLL_LINES,
                MouseEventKind::ScrollDown => MOUSE_SCROLL_LINES,
                _ => return EventResult::Ignored,
            };
            if viewer.overlay.is_empty() {
                viewer.move_cursor(delta, false)
            } else {
                viewer.scroll_overlay(delta)
            }
        }
        InputEvent::Resize(_, height) => {
            viewer.resize(*height);
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

impl Viewer {
    pub(super) fn execute(&mut self, command: Command) -> EventResult {
        let page = self.viewport.page_size() as isize;
        let total = self.document.len() as isize;

        match command {
            Command::Quit => EventResult::Quit,

            Command::CursorUp => self.move_cursor(-1, false),
            Command::CursorDown => self.move_cursor(1, false),
            Command::ExtendUp => self.move_cursor(-1, true),
            Command::ExtendDown => self.move_cursor(1, true),
            Command::PageUp => self.move_cursor(-page, false),
            Command::PageDown => self.move_cursor(page, false),
            Command::CursorFileStart => self.move_cursor(-total, false),
            Command::CursorFileEnd => self.move_cursor(total, false),

            Command::Explain => {
                let range = self.selection.active_range();
                self.explain.request(&self.document, range, &mut self.overlay);
                EventResult::Consumed
            }
            Command::ShowHelp => {
                if self.overlay.top() != Some(&OverlayView::Help) {
                    self.overlay.push(OverlayView::Help);
                }
                EventResult::Consumed
            }

            Command::ScrollUp => self.scroll_overlay(-1),
            Command::ScrollDown => self.scroll_overlay(1),
            Command::ScrollPageUp => self.scroll_overlay(-self.overlay_page()),
            Command::ScrollPageDown => self.scroll_overlay(self.overlay_page()),
            Command::Dismiss => {
                let Some(view) = self.overlay.pop() else {
                    return EventResult::Ignored;
                };
                if let Some(generation) = view.explain_generation() {
                    self.explain.dismissed(generation);
                }
                self.last_overlay_body = None;
                EventResult::Consumed
            }
        }
    }

    /// A move blocked at either end changes nothing and needs no redraw.
    pub(super) fn move_cursor(&mut self, delta: isize, extend: bool) -> EventResult {
        let total = self.document.len();
        if !self.selection.move_cursor(delta, extend, total) {
            return EventResult::Ignored;
        }
        self.viewport.follow_cursor(self.selection.cursor(), total);
        EventResult::Consumed
    }

    pub(super) fn scroll_overlay(&mut self, delta: isize) -> EventResult {
        let max = self.overlay_scroll_max();
        match self.overlay.top_mut() {
            Some(view) if view.explain_generation().is_some() => {
                let delta = delta.clamp(i32::MIN as isize, i32::MAX as isize) as i32;
                view.scroll_by(delta, max);
                EventResult::Consumed
            }
            Some(_) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }

    fn overlay_page(&self) -> isize {
        self.last_overlay_body
            .map(|body| body.height.saturating_sub(1).max(1) as isize)
            .unwrap_or(10)
    }

    /// Furthest the top explanation can scroll while its last row stays on screen.
    fn overlay_scroll_max(&self) -> u16 {
        let Some(OverlayView::Explain { content, .. }) = self.overlay.top() else {
            return 0;
        };
        let text = content.display_text();
        match self.last_overlay_body {
            Some(body) if body.width > 0 => {
                let rows = wrapped_rows(text, body.width as usize);
                rows.saturating_sub(body.height as usize).min(u16::MAX as usize) as u16
            }
            _ => text.lines().count().min(u16::MAX as usize) as u16,
        }
    }
}

/// Rows `text` occupies when wrapped to `width` columns. An estimate: word wrapping can
/// take a few more rows than character wrapping.
fn wrapped_rows(text: &str, width: usize) -> usize {
    text.lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}
