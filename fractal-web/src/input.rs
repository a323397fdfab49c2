use fractal_input::{key, mouse_button};

/// Translate a DOM `KeyboardEvent.code` into a GLFW key code.
///
/// `code` names the physical key, so the mapping is layout independent,
/// matching what the desktop build receives. Unmapped codes yield
/// `key::UNKNOWN`, which the keyboard ignores.
pub fn dom_code_to_key(code: &str) -> i32 {
    if let Some(letter) = code.strip_prefix("Key") {
        if let [c @ b'A'..=b'Z'] = letter.as_bytes() {
            return key::A + (c - b'A') as i32;
        }
        return key::UNKNOWN;
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        return single_digit(digit).map_or(key::UNKNOWN, |d| key::DIGIT_0 + d);
    }
    if let Some(rest) = code.strip_prefix("Numpad") {
        if let Some(d) = single_digit(rest) {
            return key::KP_0 + d;
        }
        return match rest {
            "Decimal" => key::KP_DECIMAL,
            "Divide" => key::KP_DIVIDE,
            "Multiply" => key::KP_MULTIPLY,
            "Subtract" => key::KP_SUBTRACT,
            "Add" => key::KP_ADD,
            "Enter" => key::KP_ENTER,
            "Equal" => key::KP_EQUAL,
            _ => key::UNKNOWN,
        };
    }
    if let Some(n) = code.strip_prefix('F').and_then(|n| n.parse::<i32>().ok()) {
        if (1..=12).contains(&n) {
            return key::F1 + (n - 1);
        }
        return key::UNKNOWN;
    }

    match code {
        "Space" => key::SPACE,
        "Quote" => key::APOSTROPHE,
        "Comma" => key::COMMA,
        "Minus" => key::MINUS,
        "Period" => key::PERIOD,
        "Slash" => key::SLASH,
        "Semicolon" => key::SEMICOLON,
        "Equal" => key::EQUAL,
        "BracketLeft" => key::LEFT_BRACKET,
        "Backslash" => key::BACKSLASH,
        "BracketRight" => key::RIGHT_BRACKET,
        "Backquote" => key::GRAVE_ACCENT,
        "Escape" => key::ESCAPE,
        "Enter" => key::ENTER,
        "Tab" => key::TAB,
        "Backspace" => key::BACKSPACE,
        "Insert" => key::INSERT,
        "Delete" => key::DELETE,
        "ArrowRight" => key::RIGHT,
        "ArrowLeft" => key::LEFT,
        "ArrowDown" => key::DOWN,
        "ArrowUp" => key::UP,
        "PageUp" => key::PAGE_UP,
        "PageDown" => key::PAGE_DOWN,
        "Home" => key::HOME,
        "End" => key::END,
        "CapsLock" => key::CAPS_LOCK,
        "ScrollLock" => key::SCROLL_LOCK,
        "NumLock" => key::NUM_LOCK,
        "PrintScreen" => key::PRINT_SCREEN,
        "Pause" => key::PAUSE,
        "ShiftLeft" => key::LEFT_SHIFT,
        "ControlLeft" => key::LEFT_CONTROL,
        "AltLeft" => key::LEFT_ALT,
        "MetaLeft" | "OSLeft" => key::LEFT_SUPER,
        "ShiftRight" => key::RIGHT_SHIFT,
        "ControlRight" => key::RIGHT_CONTROL,
        "AltRight" => key::RIGHT_ALT,
        "MetaRight" | "OSRight" => key::RIGHT_SUPER,
        "ContextMenu" => key::MENU,
        _ => key::UNKNOWN,
    }
}

fn single_digit(s: &str) -> Option<i32> {
    match s.as_bytes() {
        [d @ b'0'..=b'9'] => Some((d - b'0') as i32),
        _ => None,
    }
}

/// Translate `MouseEvent.button` (0 main, 1 auxiliary, 2 secondary, 3/4
/// back/forward) into GLFW button numbering (0 left, 1 right, 2 middle).
pub fn dom_button_to_mouse(button: i16) -> i32 {
    match button {
        0 => mouse_button::LEFT,
        1 => mouse_button::MIDDLE,
        2 => mouse_button::RIGHT,
        b @ 3..=7 => b as i32,
        _ => -1,
    }
}
