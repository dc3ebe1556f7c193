//! crossterm → frontend-neutral event conversion.

use std::io;
use std::time::Duration;

use crossterm::event as ct;

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Waits up to `timeout` for one terminal event.
///
/// Returns `Ok(None)` on timeout or for events the viewer never acts on (key releases).
pub fn poll_input(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if !ct::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(ct::read()?))
}

pub fn translate(event: ct::Event) -> Option<InputEvent> {
    let event = match event {
        ct::Event::Key(key) => {
            let key = into_key_event(key);
            if key.kind == KeyEventKind::Release {
                return None;
            }
            InputEvent::Key(key)
        }
        ct::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(s) => InputEvent::Paste(s),
    };
    Some(event)
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    let kind = match event.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Release => KeyEventKind::Release,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
    };
    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(native, _)| mods.contains(*native))
    .fold(KeyModifiers::NONE, |acc, (_, ours)| acc | ours)
}

fn into_key_code(code: ct::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    match code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        // Some terminals send Ctrl+Space as NUL.
        ct::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

fn into_mouse_event(event: ct::MouseEvent) -> MouseEvent {
    let button = |b: ct::MouseButton| match b {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    };
    let kind = match event.kind {
        ct::MouseEventKind::Down(b) => MouseEventKind::Down(button(b)),
        ct::MouseEventKind::Up(b) => MouseEventKind::Up(button(b)),
        ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(button(b)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
