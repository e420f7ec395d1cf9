/**
 * Level-triggered keyboard dispatch for game loops.
 * Callbacks are bound to key codes and fired once per tick for as long as
 * their key is held down.
 */
pub mod binding;
pub mod dispatcher;
pub mod errors;
pub mod keyboard;
pub mod source;
pub mod vkey;

/**
 * Integer identifier of a key, following the Win32 virtual-key numbering.
 */
pub type KeyCode = u32;

pub use crate::binding::Binding;
pub use crate::dispatcher::{ Dispatcher, DispatcherConfig, ScanMode, POLLED_KEYS };
pub use crate::keyboard::Keyboard;
pub use crate::source::KeySource;
