use error_chain::*;

use crate::KeyCode;

error_chain!{
    foreign_links {
        Window(winit::error::OsError);
    }

    errors {
        KeyOutOfRange(key: KeyCode, start: KeyCode, end: KeyCode) {
            description("key code outside the polled range")
            display("key code {:#04x} is outside the polled range {:#04x}..{:#04x}", key, start, end)
        }
    }
}
