//! code-xray: a terminal viewer for one source file that asks a local language model to
//! explain the selected lines.
//!
//! Modules:
//! - core: input events, commands, the view trait
//! - kernel: document, selection, viewport, prompt, explain workflow, overlays, services
//! - app: the ratatui viewer
//! - tui: crossterm event conversion and terminal lifetime
//! - cli: command line parsing

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
