//! Frequency change notification.
//!
//! One replaceable primary listener plus any number of observers keyed by
//! [`ListenerId`]. Observers are notified in registration order, after the
//! primary listener.

use indexmap::IndexMap;

pub type FrequencyCallback = Box<dyn FnMut(f64)>;

/// Handle returned by [`FrequencyListeners::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct FrequencyListeners {
    primary: Option<FrequencyCallback>,
    observers: IndexMap<ListenerId, FrequencyCallback>,
    next_id: u64,
}

impl FrequencyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the primary listener. Last registration wins.
    pub fn set_primary(&mut self, callback: impl FnMut(f64) + 'static) {
        self.primary = Some(Box::new(callback));
    }

    pub fn clear_primary(&mut self) {
        self.primary = None;
    }

    pub fn add(&mut self, callback: impl FnMut(f64) + 'static) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.observers.insert(id, Box::new(callback));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.observers.len() + usize::from(self.primary.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn notify(&mut self, value: f64) {
        if let Some(primary) = self.primary.as_mut() {
            primary(value);
        }
        for observer in self.observers.values_mut() {
            observer(value);
        }
    }
}

impl std::fmt::Debug for FrequencyListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyListeners")
            .field("primary", &self.primary.is_some())
            .field("observers", &self.observers.keys().collect::<Vec<_>>())
            .finish()
    }
}
