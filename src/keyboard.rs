/**
 * Keyboard representation fed from winit window events, serving as the key
 * source the dispatcher polls every frame.
 */
use std::collections::HashMap;
pub use winit::event::{ VirtualKeyCode, KeyboardInput, ElementState };

use log::trace;

use crate::source::KeySource;
use crate::vkey;
use crate::KeyCode;

/**
 * Held-key state indexed by virtual key code. Only keys winit has reported
 * since the last `release_all` have an entry; a missing code reads as up.
 */
#[derive(Debug, Default)]
pub struct Keyboard {
    pressed: HashMap<KeyCode, bool>
}

impl Keyboard {
    pub fn new() -> Self {
        Self { pressed: HashMap::new() }
    }

    pub fn process_input(&mut self, input: &KeyboardInput) {
        if let Some(virtual_keycode) = input.virtual_keycode {
            self.process_key(virtual_keycode, input.state);
        }
    }

    pub fn process_key(&mut self, virtual_keycode: VirtualKeyCode, state: ElementState) {
        match vkey::from_virtual_keycode(virtual_keycode) {
            Some(code) => self.set_pressed(code, state == ElementState::Pressed),
            None => trace!("no virtual key code for {:?}", virtual_keycode),
        }
    }

    pub fn set_pressed(&mut self, code: KeyCode, pressed: bool) {
        self.pressed.insert(code, pressed);
    }

    /**
     * Forgets all held keys. Release events are not delivered to a window
     * that has lost focus, so this should be called when that happens.
     */
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, code: KeyCode) -> bool {
        *self.pressed.get(&code).unwrap_or(&false)
    }
}

impl KeySource for Keyboard {
    /**
     * Besides the sided keys, the generic shift, control and alt codes report
     * down if either side is held.
     */
    fn is_down(&self, key: KeyCode) -> bool {
        match key {
            vkey::SHIFT => self.is_pressed(vkey::LSHIFT) || self.is_pressed(vkey::RSHIFT),
            vkey::CONTROL => self.is_pressed(vkey::LCONTROL) || self.is_pressed(vkey::RCONTROL),
            vkey::MENU => self.is_pressed(vkey::LMENU) || self.is_pressed(vkey::RMENU),
            _ => self.is_pressed(key),
        }
    }
}
