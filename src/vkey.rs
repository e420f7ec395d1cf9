/**
 * Virtual key codes, numbered as on Win32 so that bindings written against
 * the classic `GetAsyncKeyState` codes carry over unchanged.
 * https://docs.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes
 */
use winit::event::VirtualKeyCode;

use crate::KeyCode;

pub const BACK: KeyCode = 0x08;
pub const TAB: KeyCode = 0x09;
pub const RETURN: KeyCode = 0x0D;
pub const SHIFT: KeyCode = 0x10;
pub const CONTROL: KeyCode = 0x11;
pub const MENU: KeyCode = 0x12;
pub const PAUSE: KeyCode = 0x13;
pub const CAPITAL: KeyCode = 0x14;
pub const ESCAPE: KeyCode = 0x1B;
pub const SPACE: KeyCode = 0x20;
pub const PRIOR: KeyCode = 0x21;
pub const NEXT: KeyCode = 0x22;
pub const END: KeyCode = 0x23;
pub const HOME: KeyCode = 0x24;
pub const LEFT: KeyCode = 0x25;
pub const UP: KeyCode = 0x26;
pub const RIGHT: KeyCode = 0x27;
pub const DOWN: KeyCode = 0x28;
pub const SNAPSHOT: KeyCode = 0x2C;
pub const INSERT: KeyCode = 0x2D;
pub const DELETE: KeyCode = 0x2E;

pub const KEY_0: KeyCode = 0x30;
pub const KEY_1: KeyCode = 0x31;
pub const KEY_2: KeyCode = 0x32;
pub const KEY_3: KeyCode = 0x33;
pub const KEY_4: KeyCode = 0x34;
pub const KEY_5: KeyCode = 0x35;
pub const KEY_6: KeyCode = 0x36;
pub const KEY_7: KeyCode = 0x37;
pub const KEY_8: KeyCode = 0x38;
pub const KEY_9: KeyCode = 0x39;

pub const A: KeyCode = 0x41;
pub const B: KeyCode = 0x42;
pub const C: KeyCode = 0x43;
pub const D: KeyCode = 0x44;
pub const E: KeyCode = 0x45;
pub const F: KeyCode = 0x46;
pub const G: KeyCode = 0x47;
pub const H: KeyCode = 0x48;
pub const I: KeyCode = 0x49;
pub const J: KeyCode = 0x4A;
pub const K: KeyCode = 0x4B;
pub const L: KeyCode = 0x4C;
pub const M: KeyCode = 0x4D;
pub const N: KeyCode = 0x4E;
pub const O: KeyCode = 0x4F;
pub const P: KeyCode = 0x50;
pub const Q: KeyCode = 0x51;
pub const R: KeyCode = 0x52;
pub const S: KeyCode = 0x53;
pub const T: KeyCode = 0x54;
pub const U: KeyCode = 0x55;
pub const V: KeyCode = 0x56;
pub const W: KeyCode = 0x57;
pub const X: KeyCode = 0x58;
pub const Y: KeyCode = 0x59;
pub const Z: KeyCode = 0x5A;

pub const LWIN: KeyCode = 0x5B;
pub const RWIN: KeyCode = 0x5C;
pub const APPS: KeyCode = 0x5D;
pub const SLEEP: KeyCode = 0x5F;

pub const NUMPAD0: KeyCode = 0x60;
pub const NUMPAD1: KeyCode = 0x61;
pub const NUMPAD2: KeyCode = 0x62;
pub const NUMPAD3: KeyCode = 0x63;
pub const NUMPAD4: KeyCode = 0x64;
pub const NUMPAD5: KeyCode = 0x65;
pub const NUMPAD6: KeyCode = 0x66;
pub const NUMPAD7: KeyCode = 0x67;
pub const NUMPAD8: KeyCode = 0x68;
pub const NUMPAD9: KeyCode = 0x69;
pub const MULTIPLY: KeyCode = 0x6A;
pub const ADD: KeyCode = 0x6B;
pub const SUBTRACT: KeyCode = 0x6D;
pub const DECIMAL: KeyCode = 0x6E;
pub const DIVIDE: KeyCode = 0x6F;

pub const F1: KeyCode = 0x70;
pub const F2: KeyCode = 0x71;
pub const F3: KeyCode = 0x72;
pub const F4: KeyCode = 0x73;
pub const F5: KeyCode = 0x74;
pub const F6: KeyCode = 0x75;
pub const F7: KeyCode = 0x76;
pub const F8: KeyCode = 0x77;
pub const F9: KeyCode = 0x78;
pub const F10: KeyCode = 0x79;
pub const F11: KeyCode = 0x7A;
pub const F12: KeyCode = 0x7B;

pub const NUMLOCK: KeyCode = 0x90;
pub const SCROLL: KeyCode = 0x91;
pub const LSHIFT: KeyCode = 0xA0;
pub const RSHIFT: KeyCode = 0xA1;
pub const LCONTROL: KeyCode = 0xA2;
pub const RCONTROL: KeyCode = 0xA3;
pub const LMENU: KeyCode = 0xA4;
pub const RMENU: KeyCode = 0xA5;

// US layout punctuation.
pub const OEM_1: KeyCode = 0xBA;
pub const OEM_PLUS: KeyCode = 0xBB;
pub const OEM_COMMA: KeyCode = 0xBC;
pub const OEM_MINUS: KeyCode = 0xBD;
pub const OEM_PERIOD: KeyCode = 0xBE;
pub const OEM_2: KeyCode = 0xBF;
pub const OEM_3: KeyCode = 0xC0;
pub const OEM_4: KeyCode = 0xDB;
pub const OEM_5: KeyCode = 0xDC;
pub const OEM_6: KeyCode = 0xDD;
pub const OEM_7: KeyCode = 0xDE;

const KEY_TABLE: &[(VirtualKeyCode, KeyCode)] = &[
    (VirtualKeyCode::Back, BACK),
    (VirtualKeyCode::Tab, TAB),
    (VirtualKeyCode::Return, RETURN),
    (VirtualKeyCode::Pause, PAUSE),
    (VirtualKeyCode::Capital, CAPITAL),
    (VirtualKeyCode::Escape, ESCAPE),
    (VirtualKeyCode::Space, SPACE),
    (VirtualKeyCode::PageUp, PRIOR),
    (VirtualKeyCode::PageDown, NEXT),
    (VirtualKeyCode::End, END),
    (VirtualKeyCode::Home, HOME),
    (VirtualKeyCode::Left, LEFT),
    (VirtualKeyCode::Up, UP),
    (VirtualKeyCode::Right, RIGHT),
    (VirtualKeyCode::Down, DOWN),
    (VirtualKeyCode::Snapshot, SNAPSHOT),
    (VirtualKeyCode::Insert, INSERT),
    (VirtualKeyCode::Delete, DELETE),

    (VirtualKeyCode::Key0, KEY_0),
    (VirtualKeyCode::Key1, KEY_1),
    (VirtualKeyCode::Key2, KEY_2),
    (VirtualKeyCode::Key3, KEY_3),
    (VirtualKeyCode::Key4, KEY_4),
    (VirtualKeyCode::Key5, KEY_5),
    (VirtualKeyCode::Key6, KEY_6),
    (VirtualKeyCode::Key7, KEY_7),
    (VirtualKeyCode::Key8, KEY_8),
    (VirtualKeyCode::Key9, KEY_9),

    (VirtualKeyCode::A, A),
    (VirtualKeyCode::B, B),
    (VirtualKeyCode::C, C),
    (VirtualKeyCode::D, D),
    (VirtualKeyCode::E, E),
    (VirtualKeyCode::F, F),
    (VirtualKeyCode::G, G),
    (VirtualKeyCode::H, H),
    (VirtualKeyCode::I, I),
    (VirtualKeyCode::J, J),
    (VirtualKeyCode::K, K),
    (VirtualKeyCode::L, L),
    (VirtualKeyCode::M, M),
    (VirtualKeyCode::N, N),
    (VirtualKeyCode::O, O),
    (VirtualKeyCode::P, P),
    (VirtualKeyCode::Q, Q),
    (VirtualKeyCode::R, R),
    (VirtualKeyCode::S, S),
    (VirtualKeyCode::T, T),
    (VirtualKeyCode::U, U),
    (VirtualKeyCode::V, V),
    (VirtualKeyCode::W, W),
    (VirtualKeyCode::X, X),
    (VirtualKeyCode::Y, Y),
    (VirtualKeyCode::Z, Z),

    (VirtualKeyCode::LWin, LWIN),
    (VirtualKeyCode::RWin, RWIN),
    (VirtualKeyCode::Apps, APPS),
    (VirtualKeyCode::Sleep, SLEEP),

    (VirtualKeyCode::Numpad0, NUMPAD0),
    (VirtualKeyCode::Numpad1, NUMPAD1),
    (VirtualKeyCode::Numpad2, NUMPAD2),
    (VirtualKeyCode::Numpad3, NUMPAD3),
    (VirtualKeyCode::Numpad4, NUMPAD4),
    (VirtualKeyCode::Numpad5, NUMPAD5),
    (VirtualKeyCode::Numpad6, NUMPAD6),
    (VirtualKeyCode::Numpad7, NUMPAD7),
    (VirtualKeyCode::Numpad8, NUMPAD8),
    (VirtualKeyCode::Numpad9, NUMPAD9),
    (VirtualKeyCode::Multiply, MULTIPLY),
    (VirtualKeyCode::Add, ADD),
    (VirtualKeyCode::Subtract, SUBTRACT),
    (VirtualKeyCode::Decimal, DECIMAL),
    (VirtualKeyCode::Divide, DIVIDE),

    (VirtualKeyCode::F1, F1),
    (VirtualKeyCode::F2, F2),
    (VirtualKeyCode::F3, F3),
    (VirtualKeyCode::F4, F4),
    (VirtualKeyCode::F5, F5),
    (VirtualKeyCode::F6, F6),
    (VirtualKeyCode::F7, F7),
    (VirtualKeyCode::F8, F8),
    (VirtualKeyCode::F9, F9),
    (VirtualKeyCode::F10, F10),
    (VirtualKeyCode::F11, F11),
    (VirtualKeyCode::F12, F12),

    (VirtualKeyCode::Numlock, NUMLOCK),
    (VirtualKeyCode::Scroll, SCROLL),
    (VirtualKeyCode::LShift, LSHIFT),
    (VirtualKeyCode::RShift, RSHIFT),
    (VirtualKeyCode::LControl, LCONTROL),
    (VirtualKeyCode::RControl, RCONTROL),
    (VirtualKeyCode::LAlt, LMENU),
    (VirtualKeyCode::RAlt, RMENU),

    (VirtualKeyCode::Semicolon, OEM_1),
    (VirtualKeyCode::Equals, OEM_PLUS),
    (VirtualKeyCode::Comma, OEM_COMMA),
    (VirtualKeyCode::Minus, OEM_MINUS),
    (VirtualKeyCode::Period, OEM_PERIOD),
    (VirtualKeyCode::Slash, OEM_2),
    (VirtualKeyCode::Grave, OEM_3),
    (VirtualKeyCode::LBracket, OEM_4),
    (VirtualKeyCode::Backslash, OEM_5),
    (VirtualKeyCode::RBracket, OEM_6),
    (VirtualKeyCode::Apostrophe, OEM_7),
];

/**
 * Translates a winit key into its virtual key code. Keys without a Win32
 * counterpart (media keys, IME keys and the like) yield None.
 */
pub fn from_virtual_keycode(virtual_keycode: VirtualKeyCode) -> Option<KeyCode> {
    KEY_TABLE.iter()
        .find(|(candidate, _)| *candidate == virtual_keycode)
        .map(|&(_, code)| code)
}

/**
 * Inverse of `from_virtual_keycode`, handy for naming codes in logs. The
 * generic modifier codes (`SHIFT`, `CONTROL`, `MENU`) have no winit key.
 */
pub fn to_virtual_keycode(code: KeyCode) -> Option<VirtualKeyCode> {
    KEY_TABLE.iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|&(virtual_keycode, _)| virtual_keycode)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn letters_follow_ascii() {
        assert_eq!(from_virtual_keycode(VirtualKeyCode::A), Some(0x41));
        assert_eq!(from_virtual_keycode(VirtualKeyCode::Z), Some(u32::from(b'Z')));
        assert_eq!(from_virtual_keycode(VirtualKeyCode::Key7), Some(u32::from(b'7')));
    }

    #[test]
    fn table_is_one_to_one() {
        let winit_keys: HashSet<_> = KEY_TABLE.iter().map(|(key, _)| *key).collect();
        let codes: HashSet<_> = KEY_TABLE.iter().map(|(_, code)| *code).collect();
        assert_eq!(winit_keys.len(), KEY_TABLE.len());
        assert_eq!(codes.len(), KEY_TABLE.len());
    }

    #[test]
    fn every_code_is_polled() {
        for (_, code) in KEY_TABLE {
            assert!(crate::POLLED_KEYS.contains(code), "{:#04x} is never polled", code);
        }
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(to_virtual_keycode(ESCAPE), Some(VirtualKeyCode::Escape));
        assert_eq!(to_virtual_keycode(SHIFT), None);
    }
}
