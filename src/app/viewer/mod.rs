//! The line viewer: owns the document, selection, scroll position and overlay stack, and
//! routes input to them.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::adapters::{AppMessage, KeybindingService};
use crate::kernel::services::ports::ViewerConfig;
use crate::kernel::syntax::{highlight_document, HighlightSpan};
use crate::kernel::{
    Document, ExplainOrchestrator, ExplainPhase, OverlayStack, SelectionState, ViewportState,
};
use ratatui::layout::Rect;
use ratatui::Frame;

mod input;
mod render;

const HEADER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const OVERLAY_WIDTH_PERCENT: u16 = 80;
const OVERLAY_MARGIN: u16 = 2;

pub struct Viewer {
    document: Document,
    highlights: Vec<Vec<HighlightSpan>>,
    selection: SelectionState,
    viewport: ViewportState,
    overlay: OverlayStack,
    explain: ExplainOrchestrator,
    keybindings: KeybindingService,
    config: ViewerConfig,
    model: String,
    theme: UiTheme,
    /// Body of the topmost overlay at the last render; bounds overlay scrolling.
    last_overlay_body: Option<Rect>,
}

impl Viewer {
    pub fn new(document: Document, explain: ExplainOrchestrator, config: ViewerConfig) -> Self {
        let highlights = highlight_document(&document);
        Self {
            document,
            highlights,
            selection: SelectionState::new(),
            viewport: ViewportState::default(),
            overlay: OverlayStack::new(),
            explain,
            keybindings: KeybindingService::with_defaults(),
            config,
            model: String::new(),
            theme: UiTheme::default(),
            last_overlay_body: None,
        }
    }

    pub fn with_keybindings(mut self, keybindings: KeybindingService) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Model name shown in the header.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_theme(mut self, theme: UiTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn overlay(&self) -> &OverlayStack {
        &self.overlay
    }

    pub fn explain_phase(&self) -> ExplainPhase {
        self.explain.phase()
    }

    /// Applies a background message. Returns whether the screen needs a redraw.
    pub fn handle_message(&mut self, message: AppMessage) -> bool {
        let before = self.explain.phase();
        let phase = self.explain.apply(message, &mut self.overlay);
        phase != ExplainPhase::Superseded || self.explain.phase() != before
    }

    /// Terminal resized to `height` rows.
    pub fn resize(&mut self, height: u16) {
        let rows = height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        self.sync_viewport_height(rows as usize);
    }

    fn sync_viewport_height(&mut self, rows: usize) {
        if rows == 0 || rows == self.viewport.height {
            return;
        }
        self.viewport
            .set_height(rows, self.selection.cursor(), self.document.len());
    }
}

impl View for Viewer {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/viewer.rs"]
mod tests;
