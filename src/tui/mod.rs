//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the core builds and tests without terminal crates.

pub mod crossterm;
pub mod terminal_guard;
