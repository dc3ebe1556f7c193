//! Terminal frontend: the viewer and its colors.

pub mod theme;
mod viewer;

pub use theme::UiTheme;
pub use viewer::Viewer;
