//! Storage backends - where shoe records live.
//!
//! A [`RecordBackend`] stores whole records keyed by [`ShoeId`] and enforces
//! the case-insensitive name uniqueness constraint on insert. Every mutation
//! replaces or removes a whole record in one step under the backend's own
//! write lock, so readers always see a consistent snapshot.
//!
//! Coordination between callers (resolve-or-create, read-append-write) is the
//! store's job; see [`crate::ShoeStore`].

mod file;
mod in_memory;
mod table;

pub use file::FileBackend;
pub use in_memory::InMemoryBackend;

use crate::error::StoreError;
use crate::model::{ShoeId, ShoeName, ShoeRecord};

/// Outcome of inserting a new name.
#[derive(Debug, Clone, PartialEq)]
pub enum Inserted {
    /// A new record was created with the next identifier.
    Created(ShoeRecord),
    /// The name key was already taken; carries the existing record.
    Conflict(ShoeRecord),
}

/// Raw record storage.
pub trait RecordBackend: Send + Sync {
    fn get(&self, id: ShoeId) -> Result<Option<ShoeRecord>, StoreError>;

    /// All records ordered by identifier.
    fn list(&self) -> Result<Vec<ShoeRecord>, StoreError>;

    fn find_by_name(&self, name: &ShoeName) -> Result<Option<ShoeRecord>, StoreError>;

    /// Create an empty record for `name` unless its key is already taken.
    fn insert(&self, name: &ShoeName) -> Result<Inserted, StoreError>;

    /// Swap in a new version of an existing record.
    fn replace(&self, record: &ShoeRecord) -> Result<(), StoreError>;

    /// Remove a record. Returns false if it did not exist.
    fn remove(&self, id: ShoeId) -> Result<bool, StoreError>;
}
