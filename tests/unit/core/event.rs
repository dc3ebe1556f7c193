use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('c'));
    assert_eq!(key.code, KeyCode::Char('c'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event() {
    let event = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
    };
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::Enter));
}

#[test]
fn test_uppercase_char_becomes_shift() {
    let event = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
    assert_eq!(Key::from(event), Key::shift(KeyCode::Char('k')));

    let event = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::NONE);
    assert_eq!(Key::from(event), Key::shift(KeyCode::Char('j')));
}

#[test]
fn test_modifier_set_operations() {
    let mut mods = KeyModifiers::NONE;
    assert!(mods.is_empty());
    mods |= KeyModifiers::SHIFT;
    let both = mods | KeyModifiers::CONTROL;
    assert!(both.contains(KeyModifiers::SHIFT));
    assert!(both.contains(KeyModifiers::CONTROL));
    assert!(!both.contains(KeyModifiers::ALT));
}

#[test]
fn test_key_display() {
    assert_eq!(Key::ctrl(KeyCode::Char('c')).to_string(), "Ctrl+c");
    assert_eq!(Key::shift(KeyCode::Up).to_string(), "Shift+Up");
    assert_eq!(Key::simple(KeyCode::PageDown).to_string(), "PageDown");
    assert_eq!(Key::simple(KeyCode::Char(' ')).to_string(), "Space");
}
