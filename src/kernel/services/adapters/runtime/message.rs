use crate::kernel::selection::LineRange;
use crate::kernel::services::ports::ExplainOutcome;

/// Results posted from background tasks back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    ExplainFinished {
        generation: u64,
        range: LineRange,
        outcome: ExplainOutcome,
    },
}
