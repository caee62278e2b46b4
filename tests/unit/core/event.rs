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
    assert_eq!(key.code, KeyCode::Enter);
}

#[test]
fn uppercase_char_normalizes_to_shift() {
    let key: Key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::NONE).into();
    assert_eq!(key, Key::shift(KeyCode::Char('q')));
}

#[test]
fn shift_tab_normalizes_to_backtab() {
    let key: Key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT).into();
    assert_eq!(key.code, KeyCode::BackTab);

    let key: Key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT).into();
    assert_eq!(key.code, KeyCode::BackTab);
}

#[test]
fn modifiers_combine() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn test_input_event_conversion() {
    let input = InputEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

    assert!(input.is_key());
    assert!(!input.is_mouse());
    assert!(input.as_key().is_some());
    assert!(input.as_mouse().is_none());
}
