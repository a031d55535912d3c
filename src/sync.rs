//! Lock shim over `std::sync::Mutex` or `spin::Mutex` depending on features.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

/// Interior-mutable slot that hands out exclusive access through a closure.
pub struct Locked<T>(Inner<T>);

impl<T> Locked<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Runs `f` with exclusive access to the value. A poisoned lock is
    /// recovered.
    #[cfg(feature = "std")]
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.lock())
    }
}
