//! Full-screen views layered over the line viewer.
//!
//! The base viewer is never on the stack; an empty stack means the viewer has input focus.

use super::selection::LineRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainContent {
    Loading,
    Text(String),
    Error(String),
}

impl ExplainContent {
    pub fn is_loading(&self) -> bool {
        matches!(self, ExplainContent::Loading)
    }

    /// Text shown in the overlay body.
    pub fn display_text(&self) -> &str {
        match self {
            ExplainContent::Loading => "Waiting for the model...",
            ExplainContent::Text(text) => text,
            ExplainContent::Error(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayView {
    Explain {
        generation: u64,
        range: LineRange,
        content: ExplainContent,
        scroll: u16,
    },
    Help,
}

impl OverlayView {
    pub fn loading(generation: u64, range: LineRange) -> Self {
        OverlayView::Explain {
            generation,
            range,
            content: ExplainContent::Loading,
            scroll: 0,
        }
    }

    /// Generation this view is waiting on, if it is an explanation view.
    pub fn explain_generation(&self) -> Option<u64> {
        match self {
            OverlayView::Explain { generation, .. } => Some(*generation),
            OverlayView::Help => None,
        }
    }

    /// Scrolls an explanation view, keeping the offset within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        if let OverlayView::Explain { scroll, .. } = self {
            let step = delta.unsigned_abs().min(u16::MAX as u32) as u16;
            *scroll = if delta < 0 {
                scroll.saturating_sub(step)
            } else {
                scroll.saturating_add(step)
            }
            .min(max);
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            OverlayView::Explain { scroll, .. } => *scroll,
            OverlayView::Help => 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct OverlayStack {
    views: Vec<OverlayView>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, view: OverlayView) {
        self.views.push(view);
    }

    pub fn pop(&mut self) -> Option<OverlayView> {
        self.views.pop()
    }

    /// Replaces the content of the visible explanation view. Returns `false` when the top
    /// view is not an explanation view (or the stack is empty); depth never changes.
    pub fn update_top(&mut self, content: ExplainContent) -> bool {
        match self.views.last_mut() {
            Some(OverlayView::Explain {
                content: current,
                scroll,
                ..
            }) => {
                *current = content;
                *scroll = 0;
                true
            }
            _ => false,
        }
    }

    /// Delivers `content` to the explanation view waiting on `generation`, wherever it sits
    /// in the stack. Returns `false` when no such view is open.
    pub fn update_explain(&mut self, generation: u64, content: ExplainContent) -> bool {
        let top_matches = self
            .top()
            .and_then(OverlayView::explain_generation)
            .is_some_and(|g| g == generation);
        if top_matches {
            return self.update_top(content);
        }

        let waiting = self
            .views
            .iter_mut()
            .rev()
            .find(|view| view.explain_generation() == Some(generation));
        match waiting {
            Some(OverlayView::Explain {
                content: current,
                scroll,
                ..
            }) => {
                *current = content;
                *scroll = 0;
                true
            }
            _ => false,
        }
    }

    /// Removes every explanation view, leaving other views in order. Returns how many went.
    pub fn discard_explain(&mut self) -> usize {
        let before = self.views.len();
        self.views.retain(|view| view.explain_generation().is_none());
        before - self.views.len()
    }

    pub fn top(&self) -> Option<&OverlayView> {
        self.views.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut OverlayView> {
        self.views.last_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverlayView> {
        self.views.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/overlay.rs"]
mod tests;
