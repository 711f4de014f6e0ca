use std::sync::Arc;

use super::{Lock, LockError, LockGuard};

/// Hands out one lock per key.
///
/// Repeated calls with the same key must return the same logical lock for as
/// long as the key has not been forgotten.
pub trait LockManager: Send + Sync {
    type Lock: Lock;

    /// Get (or create) the lock for `key`.
    fn get_lock(&self, key: &str) -> Result<Arc<Self::Lock>, LockError>;

    /// Drop the bookkeeping for a key that will not be used again.
    fn forget(&self, _key: &str) -> Result<(), LockError> {
        Ok(())
    }

    /// Acquire the lock for `key`, released when the guard drops.
    fn acquire(&self, key: &str) -> Result<LockGuard<Self::Lock>, LockError> {
        LockGuard::acquire(key, self.get_lock(key)?)
    }
}
