/**
 * Per-tick input dispatcher.
 * Owns the table from key code to the bindings registered for it and fires
 * those bindings whenever the key source reports their key as held down.
 * Input is level-triggered: a held key fires its bindings on every tick.
 */
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Bound::{ Excluded, Unbounded };
use std::ops::Range;
use std::rc::Rc;

use error_chain::bail;
use log::{ debug, trace, warn };

use crate::binding::{ Binding, Operation };
use crate::errors::*;
use crate::source::KeySource;
use crate::KeyCode;

/**
 * Range of key codes scanned every tick in full-range mode.
 */
pub const POLLED_KEYS: Range<KeyCode> = 0x00..0xFE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Query every code in the polled range, bound or not.
    FullRange,
    /// Query only codes that currently have bindings.
    BoundKeys,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatcherConfig {
    pub polled_keys: Range<KeyCode>,
    pub scan_mode: ScanMode,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            polled_keys: POLLED_KEYS,
            scan_mode: ScanMode::FullRange,
        }
    }
}

/**
 * Maps key codes to bindings on receivers of type `T`.
 *
 * All methods take `&self`, so callbacks that hold a handle to the dispatcher
 * may register or remove bindings while it is polling. Before a key's
 * bindings are fired its sequence is copied; removals made by a callback
 * therefore only take effect from the next tick for that key, while
 * additions fire as soon as their key is scanned, in either scan mode.
 *
 * Registering a key outside the polled range is allowed but, in full-range
 * mode, such a binding never fires. Use `try_register` to reject those.
 */
pub struct Dispatcher<T> {
    config: DispatcherConfig,
    bindings: RefCell<BTreeMap<KeyCode, Vec<Binding<T>>>>,
}

impl<T> Dispatcher<T> {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            config,
            bindings: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /**
     * Checks the state of every key and fires the bindings of those held
     * down, in registration order. Must be called once per tick.
     * Returns how many bindings were invoked.
     */
    pub fn poll<S>(&self, source: &S) -> usize where S: KeySource + ?Sized {
        match self.config.scan_mode {
            ScanMode::FullRange => {
                self.config.polled_keys.clone()
                    .filter(|&key| source.is_down(key))
                    .map(|key| self.fire(key))
                    .sum()
            },
            ScanMode::BoundKeys => {
                let mut invoked = 0;
                let mut next = self.bindings.borrow().keys().next().copied();
                while let Some(key) = next {
                    if source.is_down(key) {
                        invoked += self.fire(key);
                    }
                    // The table may have changed while firing.
                    next = self.bindings.borrow()
                        .range((Excluded(key), Unbounded))
                        .next()
                        .map(|(&key, _)| key);
                }
                invoked
            },
        }
    }

    fn fire(&self, key: KeyCode) -> usize {
        let snapshot = match self.bindings.borrow().get(&key) {
            Some(sequence) => sequence.clone(),
            None => return 0,
        };

        trace!("key {:#04x} down, firing {} binding(s)", key, snapshot.len());
        let mut invoked = 0;
        for binding in &snapshot {
            if binding.invoke() {
                invoked += 1;
            } else {
                warn!("skipped binding on key {:#04x}: receiver is already borrowed", key);
            }
        }
        invoked
    }

    /**
     * Binds an operation on the receiver to a key. The same pair may be bound
     * more than once, in which case it fires once per binding.
     */
    pub fn register(&self, key: KeyCode, receiver: &Rc<RefCell<T>>, operation: Operation<T>) {
        if !self.reachable(key) {
            warn!(
                "key {:#04x} is outside the polled range {:#04x}..{:#04x}; its bindings will never fire",
                key, self.config.polled_keys.start, self.config.polled_keys.end
            );
        }

        let mut bindings = self.bindings.borrow_mut();
        let sequence = bindings.entry(key).or_insert_with(Vec::new);
        sequence.push(Binding::new(receiver, operation));
        debug!("bound key {:#04x} ({} binding(s))", key, sequence.len());
    }

    /**
     * Like `register`, but refuses keys that polling would never reach.
     */
    pub fn try_register(
        &self,
        key: KeyCode,
        receiver: &Rc<RefCell<T>>,
        operation: Operation<T>
    ) -> Result<()> {
        if !self.reachable(key) {
            let polled = &self.config.polled_keys;
            bail!(ErrorKind::KeyOutOfRange(key, polled.start, polled.end));
        }
        self.register(key, receiver, operation);
        Ok(())
    }

    fn reachable(&self, key: KeyCode) -> bool {
        self.config.scan_mode == ScanMode::BoundKeys || self.config.polled_keys.contains(&key)
    }

    /**
     * Removes every binding of the pair, whichever key it is bound to.
     * Returns the number of bindings removed.
     */
    pub fn remove(&self, receiver: &Rc<RefCell<T>>, operation: Operation<T>) -> usize {
        let mut bindings = self.bindings.borrow_mut();
        let mut removed = 0;
        for sequence in bindings.values_mut() {
            removed += retain_unmatched(sequence, receiver, operation);
        }
        bindings.retain(|_, sequence| !sequence.is_empty());

        debug!("unbound {} binding(s) from all keys", removed);
        removed
    }

    /**
     * Removes every binding of the pair from one key only.
     */
    pub fn remove_from_key(
        &self,
        key: KeyCode,
        receiver: &Rc<RefCell<T>>,
        operation: Operation<T>
    ) -> usize {
        let mut bindings = self.bindings.borrow_mut();
        let (removed, emptied) = match bindings.get_mut(&key) {
            Some(sequence) => {
                let removed = retain_unmatched(sequence, receiver, operation);
                (removed, sequence.is_empty())
            },
            None => (0, false),
        };
        if emptied {
            bindings.remove(&key);
        }

        debug!("unbound {} binding(s) from key {:#04x}", removed, key);
        removed
    }

    /**
     * Drops all bindings of a key.
     */
    pub fn clear_key(&self, key: KeyCode) -> usize {
        let removed = self.bindings.borrow_mut()
            .remove(&key)
            .map_or(0, |sequence| sequence.len());

        debug!("cleared {} binding(s) from key {:#04x}", removed, key);
        removed
    }

    pub fn binding_count(&self, key: KeyCode) -> usize {
        self.bindings.borrow().get(&key).map_or(0, Vec::len)
    }

    /**
     * Keys with at least one binding, in ascending order.
     */
    pub fn bound_keys(&self) -> Vec<KeyCode> {
        self.bindings.borrow().keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }
}

impl<T> Default for Dispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn retain_unmatched<T>(
    sequence: &mut Vec<Binding<T>>,
    receiver: &Rc<RefCell<T>>,
    operation: Operation<T>
) -> usize {
    let before = sequence.len();
    sequence.retain(|binding| !binding.matches(receiver, operation));
    before - sequence.len()
}
