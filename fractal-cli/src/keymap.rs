use crossterm::event::{KeyCode, ModifierKeyCode};
use fractal_input::key;

/// Translate a terminal key into a GLFW key code. Characters map to the
/// physical key they are typed with on a US layout, so `w` and `W` are the
/// same key.
pub fn terminal_key_to_code(code: KeyCode) -> i32 {
    match code {
        KeyCode::Char(c) => char_to_code(c),
        KeyCode::Enter => key::ENTER,
        KeyCode::Tab | KeyCode::BackTab => key::TAB,
        KeyCode::Backspace => key::BACKSPACE,
        KeyCode::Esc => key::ESCAPE,
        KeyCode::Insert => key::INSERT,
        KeyCode::Delete => key::DELETE,
        KeyCode::Left => key::LEFT,
        KeyCode::Right => key::RIGHT,
        KeyCode::Up => key::UP,
        KeyCode::Down => key::DOWN,
        KeyCode::Home => key::HOME,
        KeyCode::End => key::END,
        KeyCode::PageUp => key::PAGE_UP,
        KeyCode::PageDown => key::PAGE_DOWN,
        KeyCode::CapsLock => key::CAPS_LOCK,
        KeyCode::ScrollLock => key::SCROLL_LOCK,
        KeyCode::NumLock => key::NUM_LOCK,
        KeyCode::PrintScreen => key::PRINT_SCREEN,
        KeyCode::Pause => key::PAUSE,
        KeyCode::Menu => key::MENU,
        KeyCode::F(n @ 1..=12) => key::F1 + (n as i32 - 1),
        KeyCode::Modifier(m) => match m {
            ModifierKeyCode::LeftShift => key::LEFT_SHIFT,
            ModifierKeyCode::LeftControl => key::LEFT_CONTROL,
            ModifierKeyCode::LeftAlt => key::LEFT_ALT,
            ModifierKeyCode::LeftSuper => key::LEFT_SUPER,
            ModifierKeyCode::RightShift => key::RIGHT_SHIFT,
            ModifierKeyCode::RightControl => key::RIGHT_CONTROL,
            ModifierKeyCode::RightAlt => key::RIGHT_ALT,
            ModifierKeyCode::RightSuper => key::RIGHT_SUPER,
            _ => key::UNKNOWN,
        },
        _ => key::UNKNOWN,
    }
}

fn char_to_code(c: char) -> i32 {
    match c {
        'a'..='z' => key::A + (c as i32 - 'a' as i32),
        'A'..='Z' => key::A + (c as i32 - 'A' as i32),
        '0'..='9' => key::DIGIT_0 + (c as i32 - '0' as i32),
        ' ' => key::SPACE,
        '\'' | '"' => key::APOSTROPHE,
        ',' | '<' => key::COMMA,
        '-' | '_' => key::MINUS,
        '.' | '>' => key::PERIOD,
        '/' | '?' => key::SLASH,
        ';' | ':' => key::SEMICOLON,
        '=' | '+' => key::EQUAL,
        '[' | '{' => key::LEFT_BRACKET,
        '\\' | '|' => key::BACKSLASH,
        ']' | '}' => key::RIGHT_BRACKET,
        '`' | '~' => key::GRAVE_ACCENT,
        _ => key::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_ignore_case() {
        assert_eq!(terminal_key_to_code(KeyCode::Char('w')), key::W);
        assert_eq!(terminal_key_to_code(KeyCode::Char('W')), key::W);
        assert_eq!(terminal_key_to_code(KeyCode::Char('z')), key::Z);
    }

    #[test]
    fn test_shifted_symbols_share_key() {
        assert_eq!(
            terminal_key_to_code(KeyCode::Char(';')),
            terminal_key_to_code(KeyCode::Char(':'))
        );
        assert_eq!(terminal_key_to_code(KeyCode::Char(' ')), key::SPACE);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(terminal_key_to_code(KeyCode::Up), key::UP);
        assert_eq!(terminal_key_to_code(KeyCode::F(5)), key::F5);
        assert_eq!(terminal_key_to_code(KeyCode::F(13)), key::UNKNOWN);
        assert_eq!(
            terminal_key_to_code(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
            key::LEFT_SHIFT
        );
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(terminal_key_to_code(KeyCode::Char('é')), key::UNKNOWN);
        assert_eq!(terminal_key_to_code(KeyCode::Null), key::UNKNOWN);
    }
}
