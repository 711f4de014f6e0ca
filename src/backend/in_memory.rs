//! InMemoryBackend - HashMap-backed record storage for tests and single-process use.

use std::sync::{Arc, RwLock};

use super::table::Table;
use super::{Inserted, RecordBackend};
use crate::error::StoreError;
use crate::model::{ShoeId, ShoeName, ShoeRecord};

/// In-memory record storage. Clone-friendly via Arc; clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    table: Arc<RwLock<Table>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordBackend for InMemoryBackend {
    fn get(&self, id: ShoeId) -> Result<Option<ShoeRecord>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::storage("record table poisoned during get"))?;
        Ok(table.get(id))
    }

    fn list(&self) -> Result<Vec<ShoeRecord>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::storage("record table poisoned during list"))?;
        Ok(table.list())
    }

    fn find_by_name(&self, name: &ShoeName) -> Result<Option<ShoeRecord>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::storage("record table poisoned during find"))?;
        Ok(table.find_by_name(name))
    }

    fn insert(&self, name: &ShoeName) -> Result<Inserted, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::storage("record table poisoned during insert"))?;
        Ok(table.insert(name))
    }

    fn replace(&self, record: &ShoeRecord) -> Result<(), StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::storage("record table poisoned during replace"))?;
        table.replace(record)
    }

    fn remove(&self, id: ShoeId) -> Result<bool, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::storage("record table poisoned during remove"))?;
        Ok(table.remove(id))
    }
}
