//! A single value that notifies listeners when it changes.

use std::fmt;

type Predicate<T> = Box<dyn Fn(&T) -> bool>;
type Callback<T> = Box<dyn FnMut(&T)>;

struct Listener<T> {
    predicate: Predicate<T>,
    callback: Callback<T>,
}

/// Holds a value and fires registered callbacks on `set`.
///
/// Callbacks fire only when the new value differs from the previous one, and only those whose
/// predicate accepts the new value. Listeners run in registration order.
pub struct Reactive<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T: PartialEq> Reactive<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value`. Returns `true` if it differed from the previous value.
    pub fn set(&mut self, value: T) -> bool {
        let previous = std::mem::replace(&mut self.value, value);
        if previous == self.value {
            return false;
        }

        for listener in self.listeners.iter_mut() {
            if (listener.predicate)(&self.value) {
                (listener.callback)(&self.value);
            }
        }
        true
    }

    pub fn when(
        &mut self,
        predicate: impl Fn(&T) -> bool + 'static,
        callback: impl FnMut(&T) + 'static,
    ) {
        self.listeners.push(Listener {
            predicate: Box::new(predicate),
            callback: Box::new(callback),
        });
    }

    pub fn on_change(&mut self, callback: impl FnMut(&T) + 'static) {
        self.when(|_| true, callback);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialEq + Default> Default for Reactive<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Reactive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reactive")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
