//! Virtual-key codes
//!
//! Byte-sized key codes in the Windows virtual-key layout. winit reports
//! physical keys as [`KeyCode`]; [`from_key_code`] folds them into this code
//! space so the 256-entry [`InputState`](crate::InputState) table works the
//! same on every platform.

use winit::keyboard::KeyCode;

pub const BACK: u32 = 0x08;
pub const TAB: u32 = 0x09;
pub const RETURN: u32 = 0x0D;
pub const SHIFT: u32 = 0x10;
pub const CONTROL: u32 = 0x11;
pub const MENU: u32 = 0x12;
pub const PAUSE: u32 = 0x13;
pub const CAPITAL: u32 = 0x14;
pub const ESCAPE: u32 = 0x1B;
pub const SPACE: u32 = 0x20;
pub const PRIOR: u32 = 0x21;
pub const NEXT: u32 = 0x22;
pub const END: u32 = 0x23;
pub const HOME: u32 = 0x24;
pub const LEFT: u32 = 0x25;
pub const UP: u32 = 0x26;
pub const RIGHT: u32 = 0x27;
pub const DOWN: u32 = 0x28;
pub const SNAPSHOT: u32 = 0x2C;
pub const INSERT: u32 = 0x2D;
pub const DELETE: u32 = 0x2E;
pub const HELP: u32 = 0x2F;

pub const KEY_0: u32 = 0x30;
pub const KEY_1: u32 = 0x31;
pub const KEY_2: u32 = 0x32;
pub const KEY_3: u32 = 0x33;
pub const KEY_4: u32 = 0x34;
pub const KEY_5: u32 = 0x35;
pub const KEY_6: u32 = 0x36;
pub const KEY_7: u32 = 0x37;
pub const KEY_8: u32 = 0x38;
pub const KEY_9: u32 = 0x39;

pub const KEY_A: u32 = 0x41;
pub const KEY_B: u32 = 0x42;
pub const KEY_C: u32 = 0x43;
pub const KEY_D: u32 = 0x44;
pub const KEY_E: u32 = 0x45;
pub const KEY_F: u32 = 0x46;
pub const KEY_G: u32 = 0x47;
pub const KEY_H: u32 = 0x48;
pub const KEY_I: u32 = 0x49;
pub const KEY_J: u32 = 0x4A;
pub const KEY_K: u32 = 0x4B;
pub const KEY_L: u32 = 0x4C;
pub const KEY_M: u32 = 0x4D;
pub const KEY_N: u32 = 0x4E;
pub const KEY_O: u32 = 0x4F;
pub const KEY_P: u32 = 0x50;
pub const KEY_Q: u32 = 0x51;
pub const KEY_R: u32 = 0x52;
pub const KEY_S: u32 = 0x53;
pub const KEY_T: u32 = 0x54;
pub const KEY_U: u32 = 0x55;
pub const KEY_V: u32 = 0x56;
pub const KEY_W: u32 = 0x57;
pub const KEY_X: u32 = 0x58;
pub const KEY_Y: u32 = 0x59;
pub const KEY_Z: u32 = 0x5A;

pub const LWIN: u32 = 0x5B;
pub const RWIN: u32 = 0x5C;
pub const APPS: u32 = 0x5D;

pub const NUMPAD0: u32 = 0x60;
pub const MULTIPLY: u32 = 0x6A;
pub const ADD: u32 = 0x6B;
pub const SUBTRACT: u32 = 0x6D;
pub const DECIMAL: u32 = 0x6E;
pub const DIVIDE: u32 = 0x6F;

pub const F1: u32 = 0x70;
pub const F24: u32 = 0x87;

pub const NUMLOCK: u32 = 0x90;
pub const SCROLL: u32 = 0x91;

pub const OEM_1: u32 = 0xBA;
pub const OEM_PLUS: u32 = 0xBB;
pub const OEM_COMMA: u32 = 0xBC;
pub const OEM_MINUS: u32 = 0xBD;
pub const OEM_PERIOD: u32 = 0xBE;
pub const OEM_2: u32 = 0xBF;
pub const OEM_3: u32 = 0xC0;
pub const OEM_4: u32 = 0xDB;
pub const OEM_5: u32 = 0xDC;
pub const OEM_6: u32 = 0xDD;
pub const OEM_7: u32 = 0xDE;
pub const OEM_102: u32 = 0xE2;

/// Translate a physical key into its virtual-key code.
///
/// Left and right modifiers collapse into the side-less code, which is what
/// key-down messages carry on Windows. Returns `None` for keys with no
/// virtual-key equivalent.
pub fn from_key_code(key: KeyCode) -> Option<u32> {
    let code = match key {
        KeyCode::Backspace => BACK,
        KeyCode::Tab => TAB,
        KeyCode::Enter | KeyCode::NumpadEnter => RETURN,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => SHIFT,
        KeyCode::ControlLeft | KeyCode::ControlRight => CONTROL,
        KeyCode::AltLeft | KeyCode::AltRight => MENU,
        KeyCode::Pause => PAUSE,
        KeyCode::CapsLock => CAPITAL,
        KeyCode::Escape => ESCAPE,
        KeyCode::Space => SPACE,
        KeyCode::PageUp => PRIOR,
        KeyCode::PageDown => NEXT,
        KeyCode::End => END,
        KeyCode::Home => HOME,
        KeyCode::ArrowLeft => LEFT,
        KeyCode::ArrowUp => UP,
        KeyCode::ArrowRight => RIGHT,
        KeyCode::ArrowDown => DOWN,
        KeyCode::PrintScreen => SNAPSHOT,
        KeyCode::Insert => INSERT,
        KeyCode::Delete => DELETE,
        KeyCode::Help => HELP,

        KeyCode::Digit0 => KEY_0,
        KeyCode::Digit1 => KEY_1,
        KeyCode::Digit2 => KEY_2,
        KeyCode::Digit3 => KEY_3,
        KeyCode::Digit4 => KEY_4,
        KeyCode::Digit5 => KEY_5,
        KeyCode::Digit6 => KEY_6,
        KeyCode::Digit7 => KEY_7,
        KeyCode::Digit8 => KEY_8,
        KeyCode::Digit9 => KEY_9,

        KeyCode::KeyA => KEY_A,
        KeyCode::KeyB => KEY_B,
        KeyCode::KeyC => KEY_C,
        KeyCode::KeyD => KEY_D,
        KeyCode::KeyE => KEY_E,
        KeyCode::KeyF => KEY_F,
        KeyCode::KeyG => KEY_G,
        KeyCode::KeyH => KEY_H,
        KeyCode::KeyI => KEY_I,
        KeyCode::KeyJ => KEY_J,
        KeyCode::KeyK => KEY_K,
        KeyCode::KeyL => KEY_L,
        KeyCode::KeyM => KEY_M,
        KeyCode::KeyN => KEY_N,
        KeyCode::KeyO => KEY_O,
        KeyCode::KeyP => KEY_P,
        KeyCode::KeyQ => KEY_Q,
        KeyCode::KeyR => KEY_R,
        KeyCode::KeyS => KEY_S,
        KeyCode::KeyT => KEY_T,
        KeyCode::KeyU => KEY_U,
        KeyCode::KeyV => KEY_V,
        KeyCode::KeyW => KEY_W,
        KeyCode::KeyX => KEY_X,
        KeyCode::KeyY => KEY_Y,
        KeyCode::KeyZ => KEY_Z,

        KeyCode::SuperLeft => LWIN,
        KeyCode::SuperRight => RWIN,
        KeyCode::ContextMenu => APPS,

        KeyCode::Numpad0 => NUMPAD0,
        KeyCode::Numpad1 => NUMPAD0 + 1,
        KeyCode::Numpad2 => NUMPAD0 + 2,
        KeyCode::Numpad3 => NUMPAD0 + 3,
        KeyCode::Numpad4 => NUMPAD0 + 4,
        KeyCode::Numpad5 => NUMPAD0 + 5,
        KeyCode::Numpad6 => NUMPAD0 + 6,
        KeyCode::Numpad7 => NUMPAD0 + 7,
        KeyCode::Numpad8 => NUMPAD0 + 8,
        KeyCode::Numpad9 => NUMPAD0 + 9,
        KeyCode::NumpadMultiply => MULTIPLY,
        KeyCode::NumpadAdd => ADD,
        KeyCode::NumpadSubtract => SUBTRACT,
        KeyCode::NumpadDecimal => DECIMAL,
        KeyCode::NumpadDivide => DIVIDE,

        KeyCode::F1 => F1,
        KeyCode::F2 => F1 + 1,
        KeyCode::F3 => F1 + 2,
        KeyCode::F4 => F1 + 3,
        KeyCode::F5 => F1 + 4,
        KeyCode::F6 => F1 + 5,
        KeyCode::F7 => F1 + 6,
        KeyCode::F8 => F1 + 7,
        KeyCode::F9 => F1 + 8,
        KeyCode::F10 => F1 + 9,
        KeyCode::F11 => F1 + 10,
        KeyCode::F12 => F1 + 11,
        KeyCode::F13 => F1 + 12,
        KeyCode::F14 => F1 + 13,
        KeyCode::F15 => F1 + 14,
        KeyCode::F16 => F1 + 15,
        KeyCode::F17 => F1 + 16,
        KeyCode::F18 => F1 + 17,
        KeyCode::F19 => F1 + 18,
        KeyCode::F20 => F1 + 19,
        KeyCode::F21 => F1 + 20,
        KeyCode::F22 => F1 + 21,
        KeyCode::F23 => F1 + 22,
        KeyCode::F24 => F24,

        KeyCode::NumLock => NUMLOCK,
        KeyCode::ScrollLock => SCROLL,

        KeyCode::Semicolon => OEM_1,
        KeyCode::Equal => OEM_PLUS,
        KeyCode::Comma => OEM_COMMA,
        KeyCode::Minus => OEM_MINUS,
        KeyCode::Period => OEM_PERIOD,
        KeyCode::Slash => OEM_2,
        KeyCode::Backquote => OEM_3,
        KeyCode::BracketLeft => OEM_4,
        KeyCode::Backslash => OEM_5,
        KeyCode::BracketRight => OEM_6,
        KeyCode::Quote => OEM_7,
        KeyCode::IntlBackslash => OEM_102,

        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KEY_COUNT;

    #[test]
    fn test_escape_matches_windows_code() {
        assert_eq!(ESCAPE, 27);
        assert_eq!(from_key_code(KeyCode::Escape), Some(ESCAPE));
    }

    #[test]
    fn test_letters_and_digits_are_ascii() {
        assert_eq!(from_key_code(KeyCode::KeyA), Some('A' as u32));
        assert_eq!(from_key_code(KeyCode::KeyZ), Some('Z' as u32));
        assert_eq!(from_key_code(KeyCode::Digit0), Some('0' as u32));
        assert_eq!(from_key_code(KeyCode::Digit9), Some('9' as u32));
    }

    #[test]
    fn test_modifiers_collapse_sides() {
        assert_eq!(from_key_code(KeyCode::ShiftLeft), Some(SHIFT));
        assert_eq!(from_key_code(KeyCode::ShiftRight), Some(SHIFT));
        assert_eq!(from_key_code(KeyCode::ControlRight), Some(CONTROL));
        assert_eq!(from_key_code(KeyCode::AltLeft), Some(MENU));
    }

    #[test]
    fn test_function_key_range() {
        assert_eq!(from_key_code(KeyCode::F1), Some(F1));
        assert_eq!(from_key_code(KeyCode::F12), Some(0x7B));
        assert_eq!(from_key_code(KeyCode::F24), Some(F24));
        assert_eq!(from_key_code(KeyCode::Numpad9), Some(0x69));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(from_key_code(KeyCode::F25), None);
        assert_eq!(from_key_code(KeyCode::Fn), None);
    }

    #[test]
    fn test_all_codes_fit_table() {
        let samples = [
            KeyCode::Escape,
            KeyCode::IntlBackslash,
            KeyCode::F24,
            KeyCode::Quote,
            KeyCode::ScrollLock,
        ];
        for key in samples {
            let code = from_key_code(key).unwrap();
            assert!((code as usize) < KEY_COUNT);
        }
    }
}
