//! Semantic commands: what a key does, independent of which key it is.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    CursorUp,
    CursorDown,
    ExtendUp,
    ExtendDown,
    PageUp,
    PageDown,
    CursorFileStart,
    CursorFileEnd,

    Explain,
    ShowHelp,

    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Dismiss,

    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::ExtendUp => "extendUp",
            Command::ExtendDown => "extendDown",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::Explain => "explain",
            Command::ShowHelp => "showHelp",
            Command::ScrollUp => "scrollUp",
            Command::ScrollDown => "scrollDown",
            Command::ScrollPageUp => "scrollPageUp",
            Command::ScrollPageDown => "scrollPageDown",
            Command::Dismiss => "dismiss",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "extendUp" => Command::ExtendUp,
            "extendDown" => Command::ExtendDown,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "explain" => Command::Explain,
            "showHelp" => Command::ShowHelp,
            "scrollUp" => Command::ScrollUp,
            "scrollDown" => Command::ScrollDown,
            "scrollPageUp" => Command::ScrollPageUp,
            "scrollPageDown" => Command::ScrollPageDown,
            "dismiss" => Command::Dismiss,
            "quit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::CursorUp => "Move up",
            Command::CursorDown => "Move down",
            Command::ExtendUp => "Extend selection up",
            Command::ExtendDown => "Extend selection down",
            Command::PageUp => "Page up",
            Command::PageDown => "Page down",
            Command::CursorFileStart => "Go to first line",
            Command::CursorFileEnd => "Go to last line",
            Command::Explain => "Explain selection",
            Command::ShowHelp => "Show key bindings",
            Command::ScrollUp => "Scroll up",
            Command::ScrollDown => "Scroll down",
            Command::ScrollPageUp => "Scroll page up",
            Command::ScrollPageDown => "Scroll page down",
            Command::Dismiss => "Close",
            Command::Quit => "Quit",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
