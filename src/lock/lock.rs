use super::LockError;

/// A single blocking lock.
///
/// `lock` waits (without spinning) until the lock is free. In-memory locks use
/// `Mutex` + `Condvar`; other implementations might use database advisory locks.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Try to acquire the lock without blocking.
    /// Returns `Ok(true)` if acquired, `Ok(false)` if already held.
    fn try_lock(&self) -> Result<bool, LockError>;

    /// Release the lock.
    fn unlock(&self) -> Result<(), LockError>;
}
