//! Terminal-independent core: document, selection, viewport, prompt, explain workflow,
//! overlay stack, highlighting, and the service layer.

pub mod document;
pub mod explain;
pub mod language;
pub mod overlay;
pub mod prompt;
pub mod selection;
pub mod services;
pub mod syntax;
pub mod viewport;

pub use document::{Document, DocumentError};
pub use explain::{ExplainOrchestrator, ExplainPhase};
pub use language::LanguageId;
pub use overlay::{ExplainContent, OverlayStack, OverlayView};
pub use prompt::build_prompt;
pub use selection::{LineRange, SelectionState};
pub use viewport::ViewportState;
