use ratatui::layout::Rect;
use ratatui::Frame;

use super::event::InputEvent;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
