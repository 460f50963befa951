//! Serialized index: a mutex-guarded [`Critnib`] for shared use.
//!
//! The tree itself performs no locking and expects callers to serialize all
//! access. This wrapper is that serialization layer: one mutex per index,
//! `&self` receivers throughout, and reads that clone the stored handle out
//! so nothing borrowed escapes the critical section. Handles are expected to
//! be cheap to clone (`Copy` ids, `Arc`s, pointers).

use parking_lot::Mutex;

use crate::critnib::{Critnib, SetError};
use crate::tracing_helpers::{debug_log, error_log};

/// A [`Critnib`] behind a mutex, shareable across threads.
///
/// # Example
///
/// ```rust
/// use vmcache::CritnibIndex;
///
/// let index = CritnibIndex::new();
/// index.insert(b"\x01\x00\x00\x00k", 42u64).unwrap();
/// assert_eq!(index.get(b"\x01\x00\x00\x00k"), Some(42));
/// assert_eq!(index.remove(b"\x01\x00\x00\x00k"), Some(42));
/// ```
pub struct CritnibIndex<'k, V> {
    inner: Mutex<Critnib<'k, V>>,
}

impl<V> std::fmt::Debug for CritnibIndex<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CritnibIndex")
            .field("len", &self.inner.lock().len())
            .finish()
    }
}

impl<V> Default for CritnibIndex<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k, V> CritnibIndex<'k, V> {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Critnib::new()),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Insert an association under the lock.
    ///
    /// # Errors
    ///
    /// Propagates [`SetError`] from [`Critnib::set`].
    pub fn insert(&self, key: &'k [u8], value: V) -> Result<(), SetError> {
        match self.inner.lock().set(key, value) {
            Ok(()) => Ok(()),

            Err(err) => {
                error_log!(key_len = key.len(), error = %err, "index insert failed");
                Err(err)
            }
        }
    }

    /// Remove an association under the lock, returning the stored handle.
    pub fn remove(&self, key: &[u8]) -> Option<V> {
        let removed = self.inner.lock().remove(key);
        if removed.is_none() {
            debug_log!(key_len = key.len(), "index remove: no such key");
        }
        removed
    }
}

impl<V: Clone> CritnibIndex<'_, V> {
    /// Look up a key under the lock, cloning the stored handle out.
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }
}
