//! Service adapters: runtime specific implementations (IO/async).

pub mod keybinding;
pub mod ollama;
pub mod runtime;
pub mod settings;

pub use keybinding::{parse_keybinding, KeybindingContext, KeybindingService};
pub use ollama::OllamaClient;
pub use runtime::{AppMessage, AsyncRuntime, ExplainJob};
pub use settings::{
    ensure_log_dir, get_log_dir, get_settings_path, load_settings, load_settings_from,
};
