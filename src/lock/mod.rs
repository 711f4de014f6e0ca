//! Keyed locks used by the store to serialize work on one shoe.
//!
//! The store takes a lock per normalized name around resolve-or-create and a
//! lock per record identifier around append and delete. `InMemoryLockManager`
//! is the default; a distributed implementation could back the same traits
//! with advisory locks in the database.

mod error;
mod guard;
mod in_memory;
mod lock;
mod lock_manager;

pub use error::LockError;
pub use guard::LockGuard;
pub use in_memory::{InMemoryLock, InMemoryLockManager};
pub use lock::Lock;
pub use lock_manager::LockManager;
