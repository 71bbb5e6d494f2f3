use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn typed(s: &str) -> TextField {
    let mut field = TextField::default();
    for c in s.chars() {
        field.insert_char(c);
    }
    field
}

#[test]
fn typing_appends_at_cursor() {
    let mut field = typed("milk");
    field.move_home();
    field.insert_char('>');
    assert_eq!(field.value(), ">milk");
    assert_eq!(field.cursor_column(), 1);
}

#[test]
fn backspace_and_delete_respect_multibyte_chars() {
    let mut field = typed("café au lait");
    for _ in 0..8 {
        field.move_left();
    }
    // Cursor sits right after "café".
    field.backspace();
    assert_eq!(field.value(), "caf au lait");

    field.move_home();
    field.set("né".to_string());
    field.move_left();
    field.delete();
    assert_eq!(field.value(), "n");
}

#[test]
fn cursor_stays_in_bounds() {
    let mut field = typed("ab");
    field.move_right();
    field.move_right();
    assert_eq!(field.cursor_column(), 2);
    field.move_home();
    field.move_left();
    field.backspace();
    assert_eq!(field.value(), "ab");
    assert_eq!(field.cursor_column(), 0);
}

#[test]
fn only_editing_keys_are_consumed() {
    let mut field = TextField::default();
    assert!(field.apply_edit_key(key(KeyCode::Char('x'))));
    assert!(field.apply_edit_key(key(KeyCode::Left)));
    assert!(!field.apply_edit_key(key(KeyCode::Enter)));
    assert!(!field.apply_edit_key(key(KeyCode::Esc)));
    assert!(!field.apply_edit_key(key(KeyCode::Tab)));
    assert!(!field.apply_edit_key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert_eq!(field.value(), "x");
}

#[test]
fn shifted_chars_are_inserted() {
    let mut field = TextField::default();
    field.apply_edit_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
    assert_eq!(field.value(), "B");
}
