use crate::KeyCode;

/**
 * Anything that can report whether a key is currently held down.
 * The dispatcher queries this once per key per tick.
 */
pub trait KeySource {
    fn is_down(&self, key: KeyCode) -> bool;
}

impl<F> KeySource for F where F: Fn(KeyCode) -> bool {
    fn is_down(&self, key: KeyCode) -> bool {
        self(key)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_key_sources() {
        let only_space = |key: KeyCode| key == 0x20;
        assert!(only_space.is_down(0x20));
        assert!(!only_space.is_down(0x41));
    }
}
