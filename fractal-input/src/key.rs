//! Key codes in GLFW numbering. The desktop build receives these directly
//! from its key callback; other event sources translate into them.

pub const UNKNOWN: i32 = -1;

pub const SPACE: i32 = 32;
pub const APOSTROPHE: i32 = 39;
pub const COMMA: i32 = 44;
pub const MINUS: i32 = 45;
pub const PERIOD: i32 = 46;
pub const SLASH: i32 = 47;
pub const DIGIT_0: i32 = 48;
pub const DIGIT_1: i32 = 49;
pub const DIGIT_2: i32 = 50;
pub const DIGIT_3: i32 = 51;
pub const DIGIT_4: i32 = 52;
pub const DIGIT_5: i32 = 53;
pub const DIGIT_6: i32 = 54;
pub const DIGIT_7: i32 = 55;
pub const DIGIT_8: i32 = 56;
pub const DIGIT_9: i32 = 57;
pub const SEMICOLON: i32 = 59;
pub const EQUAL: i32 = 61;
pub const A: i32 = 65;
pub const B: i32 = 66;
pub const C: i32 = 67;
pub const D: i32 = 68;
pub const E: i32 = 69;
pub const F: i32 = 70;
pub const G: i32 = 71;
pub const H: i32 = 72;
pub const I: i32 = 73;
pub const J: i32 = 74;
pub const K: i32 = 75;
pub const L: i32 = 76;
pub const M: i32 = 77;
pub const N: i32 = 78;
pub const O: i32 = 79;
pub const P: i32 = 80;
pub const Q: i32 = 81;
pub const R: i32 = 82;
pub const S: i32 = 83;
pub const T: i32 = 84;
pub const U: i32 = 85;
pub const V: i32 = 86;
pub const W: i32 = 87;
pub const X: i32 = 88;
pub const Y: i32 = 89;
pub const Z: i32 = 90;
pub const LEFT_BRACKET: i32 = 91;
pub const BACKSLASH: i32 = 92;
pub const RIGHT_BRACKET: i32 = 93;
pub const GRAVE_ACCENT: i32 = 96;

pub const ESCAPE: i32 = 256;
pub const ENTER: i32 = 257;
pub const TAB: i32 = 258;
pub const BACKSPACE: i32 = 259;
pub const INSERT: i32 = 260;
pub const DELETE: i32 = 261;
pub const RIGHT: i32 = 262;
pub const LEFT: i32 = 263;
pub const DOWN: i32 = 264;
pub const UP: i32 = 265;
pub const PAGE_UP: i32 = 266;
pub const PAGE_DOWN: i32 = 267;
pub const HOME: i32 = 268;
pub const END: i32 = 269;
pub const CAPS_LOCK: i32 = 280;
pub const SCROLL_LOCK: i32 = 281;
pub const NUM_LOCK: i32 = 282;
pub const PRINT_SCREEN: i32 = 283;
pub const PAUSE: i32 = 284;
pub const F1: i32 = 290;
pub const F2: i32 = 291;
pub const F3: i32 = 292;
pub const F4: i32 = 293;
pub const F5: i32 = 294;
pub const F6: i32 = 295;
pub const F7: i32 = 296;
pub const F8: i32 = 297;
pub const F9: i32 = 298;
pub const F10: i32 = 299;
pub const F11: i32 = 300;
pub const F12: i32 = 301;
pub const KP_0: i32 = 320;
pub const KP_1: i32 = 321;
pub const KP_2: i32 = 322;
pub const KP_3: i32 = 323;
pub const KP_4: i32 = 324;
pub const KP_5: i32 = 325;
pub const KP_6: i32 = 326;
pub const KP_7: i32 = 327;
pub const KP_8: i32 = 328;
pub const KP_9: i32 = 329;
pub const KP_DECIMAL: i32 = 330;
pub const KP_DIVIDE: i32 = 331;
pub const KP_MULTIPLY: i32 = 332;
pub const KP_SUBTRACT: i32 = 333;
pub const KP_ADD: i32 = 334;
pub const KP_ENTER: i32 = 335;
pub const KP_EQUAL: i32 = 336;
pub const LEFT_SHIFT: i32 = 340;
pub const LEFT_CONTROL: i32 = 341;
pub const LEFT_ALT: i32 = 342;
pub const LEFT_SUPER: i32 = 343;
pub const RIGHT_SHIFT: i32 = 344;
pub const RIGHT_CONTROL: i32 = 345;
pub const RIGHT_ALT: i32 = 346;
pub const RIGHT_SUPER: i32 = 347;
pub const MENU: i32 = 348;

pub const LAST: i32 = MENU;

const NAMES: &[(&str, i32)] = &[
    ("Space", SPACE),
    ("Apostrophe", APOSTROPHE),
    ("Comma", COMMA),
    ("Minus", MINUS),
    ("Period", PERIOD),
    ("Slash", SLASH),
    ("0", DIGIT_0),
    ("1", DIGIT_1),
    ("2", DIGIT_2),
    ("3", DIGIT_3),
    ("4", DIGIT_4),
    ("5", DIGIT_5),
    ("6", DIGIT_6),
    ("7", DIGIT_7),
    ("8", DIGIT_8),
    ("9", DIGIT_9),
    ("Semicolon", SEMICOLON),
    ("Equal", EQUAL),
    ("A", A),
    ("B", B),
    ("C", C),
    ("D", D),
    ("E", E),
    ("F", F),
    ("G", G),
    ("H", H),
    ("I", I),
    ("J", J),
    ("K", K),
    ("L", L),
    ("M", M),
    ("N", N),
    ("O", O),
    ("P", P),
    ("Q", Q),
    ("R", R),
    ("S", S),
    ("T", T),
    ("U", U),
    ("V", V),
    ("W", W),
    ("X", X),
    ("Y", Y),
    ("Z", Z),
    ("LeftBracket", LEFT_BRACKET),
    ("Backslash", BACKSLASH),
    ("RightBracket", RIGHT_BRACKET),
    ("GraveAccent", GRAVE_ACCENT),
    ("Escape", ESCAPE),
    ("Enter", ENTER),
    ("Tab", TAB),
    ("Backspace", BACKSPACE),
    ("Insert", INSERT),
    ("Delete", DELETE),
    ("Right", RIGHT),
    ("Left", LEFT),
    ("Down", DOWN),
    ("Up", UP),
    ("PageUp", PAGE_UP),
    ("PageDown", PAGE_DOWN),
    ("Home", HOME),
    ("End", END),
    ("CapsLock", CAPS_LOCK),
    ("ScrollLock", SCROLL_LOCK),
    ("NumLock", NUM_LOCK),
    ("PrintScreen", PRINT_SCREEN),
    ("Pause", PAUSE),
    ("F1", F1),
    ("F2", F2),
    ("F3", F3),
    ("F4", F4),
    ("F5", F5),
    ("F6", F6),
    ("F7", F7),
    ("F8", F8),
    ("F9", F9),
    ("F10", F10),
    ("F11", F11),
    ("F12", F12),
    ("Kp0", KP_0),
    ("Kp1", KP_1),
    ("Kp2", KP_2),
    ("Kp3", KP_3),
    ("Kp4", KP_4),
    ("Kp5", KP_5),
    ("Kp6", KP_6),
    ("Kp7", KP_7),
    ("Kp8", KP_8),
    ("Kp9", KP_9),
    ("KpDecimal", KP_DECIMAL),
    ("KpDivide", KP_DIVIDE),
    ("KpMultiply", KP_MULTIPLY),
    ("KpSubtract", KP_SUBTRACT),
    ("KpAdd", KP_ADD),
    ("KpEnter", KP_ENTER),
    ("KpEqual", KP_EQUAL),
    ("LeftShift", LEFT_SHIFT),
    ("LeftControl", LEFT_CONTROL),
    ("LeftAlt", LEFT_ALT),
    ("LeftSuper", LEFT_SUPER),
    ("RightShift", RIGHT_SHIFT),
    ("RightControl", RIGHT_CONTROL),
    ("RightAlt", RIGHT_ALT),
    ("RightSuper", RIGHT_SUPER),
    ("Menu", MENU),
];

/// Display name for a key code, if it has one.
pub fn name(code: i32) -> Option<&'static str> {
    NAMES.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
}

/// Parse a key name (case-insensitive). Strings that name no key but parse
/// as an integer are taken as raw codes. The single digits `"0"`..`"9"` are
/// key names and resolve to `DIGIT_0`..`DIGIT_9`, so raw codes 0..9 are only
/// reachable through a numeric (non-string) value.
pub fn from_name(name: &str) -> Option<i32> {
    let name = name.trim();
    if let Some((_, code)) = NAMES.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
        return Some(*code);
    }
    name.parse::<i32>().ok()
}

/// All named keys, in code order.
pub fn all() -> impl Iterator<Item = (&'static str, i32)> {
    NAMES.iter().copied()
}
