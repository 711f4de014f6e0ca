use std::sync::Arc;

use super::{Lock, LockError};

/// Holds a lock until dropped.
pub struct LockGuard<L: Lock> {
    key: String,
    lock: Arc<L>,
}

impl<L: Lock> LockGuard<L> {
    /// Block until `lock` is acquired.
    pub fn acquire(key: &str, lock: Arc<L>) -> Result<Self, LockError> {
        lock.lock()?;
        Ok(LockGuard {
            key: key.to_string(),
            lock,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<L: Lock> Drop for LockGuard<L> {
    fn drop(&mut self) {
        if let Err(err) = self.lock.unlock() {
            tracing::warn!(key = %self.key, error = %err, "failed to release lock");
        }
    }
}
