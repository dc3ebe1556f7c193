//! Service ports: traits + data contracts.

pub mod explain;
pub mod settings;

pub use explain::{ExplainConfig, ExplainError, ExplainFuture, ExplainOutcome, ExplainService};
pub use settings::{KeybindingRule, Settings, ViewerConfig};
