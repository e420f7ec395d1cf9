/**
 * Pairing of a receiver with one of its zero-argument operations, fired by
 * the dispatcher when the bound key is held.
 */
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/**
 * Operation invoked on a receiver. Plain function pointers are used instead
 * of closures so that two bindings can be compared for removal.
 */
pub type Operation<T> = fn(&mut T);

pub struct Binding<T> {
    receiver: Rc<RefCell<T>>,
    operation: Operation<T>,
}

impl<T> Binding<T> {
    pub fn new(receiver: &Rc<RefCell<T>>, operation: Operation<T>) -> Self {
        Self {
            receiver: Rc::clone(receiver),
            operation,
        }
    }

    /**
     * Runs the operation on the receiver. Returns false without running it if
     * the receiver is already mutably borrowed elsewhere.
     */
    pub fn invoke(&self) -> bool {
        match self.receiver.try_borrow_mut() {
            Ok(mut receiver) => {
                (self.operation)(&mut *receiver);
                true
            },
            Err(_) => false,
        }
    }

    /**
     * Identity check used by removal: same receiver allocation and same
     * function address. Identical function bodies may be merged by the
     * compiler, in which case they compare equal.
     */
    pub fn matches(&self, receiver: &Rc<RefCell<T>>, operation: Operation<T>) -> bool {
        Rc::ptr_eq(&self.receiver, receiver)
            && self.operation as usize == operation as usize
    }

    pub fn receiver(&self) -> &Rc<RefCell<T>> {
        &self.receiver
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            receiver: Rc::clone(&self.receiver),
            operation: self.operation,
        }
    }
}

impl<T> PartialEq for Binding<T> {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.receiver, other.operation)
    }
}

impl<T> Eq for Binding<T> {}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("receiver", &Rc::as_ptr(&self.receiver))
            .field("operation", &(self.operation as usize as *const ()))
            .finish()
    }
}
