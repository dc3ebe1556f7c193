//! Core abstractions shared by the kernel and the terminal frontend:
//! input events, semantic commands, and the view trait.

pub mod command;
pub mod event;
#[cfg(feature = "tui")]
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};
#[cfg(feature = "tui")]
pub use view::{EventResult, View};
