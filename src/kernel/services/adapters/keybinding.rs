//! Key bindings: key → command, per input context.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    /// Active everywhere, checked after the focused context.
    Global,
    /// The line viewer (no overlay open).
    Viewer,
    /// Any overlay view on top of the viewer.
    Overlay,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Some(Self::Global),
            "viewer" | "base" => Some(Self::Viewer),
            "overlay" | "modal" | "explain" => Some(Self::Overlay),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    viewer: FxHashMap<Key, Command>,
    overlay: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            viewer: default_viewer_keybindings(),
            overlay: default_overlay_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Viewer => self.viewer.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Overlay => self.overlay.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Viewer => &self.viewer,
            KeybindingContext::Overlay => &self.overlay,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules on top of the defaults. Invalid rules are logged and skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let context = match rule.context.as_deref() {
                Some(value) => match KeybindingContext::parse(value) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %value, "unknown keybinding context");
                        continue;
                    }
                },
                None => KeybindingContext::Viewer,
            };
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding");
                continue;
            };

            if rule.command.is_empty() || rule.command == "none" {
                self.unbind(context, &key);
                continue;
            }
            match Command::from_name(&rule.command) {
                Some(command) => self.bind(context, key, command),
                None => tracing::warn!(command = %rule.command, "unknown command in keybinding"),
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Viewer => &mut self.viewer,
            KeybindingContext::Overlay => &mut self.overlay,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings
}

fn default_viewer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(24);

    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::CursorDown);

    bindings.insert(Key::shift(KeyCode::Up), Command::ExtendUp);
    bindings.insert(Key::shift(KeyCode::Char('k')), Command::ExtendUp);
    bindings.insert(Key::shift(KeyCode::Down), Command::ExtendDown);
    bindings.insert(Key::shift(KeyCode::Char('j')), Command::ExtendDown);

    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::simple(KeyCode::Char('g')), Command::CursorFileStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorFileEnd);
    bindings.insert(Key::shift(KeyCode::Char('g')), Command::CursorFileEnd);

    bindings.insert(Key::simple(KeyCode::Enter), Command::Explain);
    bindings.insert(Key::simple(KeyCode::Char('e')), Command::Explain);
    bindings.insert(Key::simple(KeyCode::Char('?')), Command::ShowHelp);
    bindings.insert(Key::shift(KeyCode::Char('?')), Command::ShowHelp);

    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);

    bindings
}

fn default_overlay_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Dismiss);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Dismiss);

    bindings.insert(Key::simple(KeyCode::Up), Command::ScrollUp);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::ScrollUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::ScrollDown);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::ScrollDown);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::ScrollPageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::ScrollPageDown);

    bindings
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
            _ => key_part = Some(part),
        }
    }
    let mut code = parse_key_code(key_part?)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            code = KeyCode::Char(ch.to_ascii_lowercase());
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
