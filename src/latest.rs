//! Single-slot value hand-off between the sensor loop and the render loop.

use std::sync::Mutex;

/// A one-value mailbox where new values overwrite old ones.
///
/// The sensor loop publishes the newest tracked point; the render loop reads
/// whatever is current. There is no queue and no backpressure — a slow reader
/// sees only the freshest value, and a reader between publishes sees the
/// previous one; the driver loop tolerates that staleness.
///
/// The mutex guards only the swap or clone itself, never any longer
/// critical section.
#[derive(Debug, Default)]
pub struct Latest<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Latest<T> {
    pub fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }

    /// Replace the slot's value with `value`, discarding the previous one.
    pub fn publish(&self, value: T) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(value);
    }

    /// Remove and return the current value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl<T: Clone> Latest<T> {
    /// The current value, if any has ever been published.
    pub fn latest(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
