use std::sync::{Arc, RwLock};

/// Shared state handle with interior mutability.
///
/// `State<T>` wraps an `Arc<RwLock<T>>`, so clones point at the same value.
/// An embedder hands a `State<OpenSet>` to a group to keep ownership of the
/// open items while the group itself comes and goes (see
/// [`GroupConfig::open_items`](crate::GroupConfig::open_items)).
///
/// # Example
///
/// ```
/// use accordion::{OpenSet, State};
///
/// let lifted = State::new(OpenSet::new());
/// let handle = lifted.clone();
/// handle.update(|open| open.toggle("details", true));
///
/// assert!(lifted.get().contains("details"));
/// assert!(lifted.ptr_eq(&handle));
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
    }

    /// Whether two handles share the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
