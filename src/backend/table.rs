use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::Inserted;
use crate::error::StoreError;
use crate::model::{Rating, ShoeId, ShoeName, ShoeRecord};

/// The record table shared by the backends: records by id plus the unique
/// name index.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    next_id: u64,
    records: BTreeMap<ShoeId, ShoeRecord>,
    names: HashMap<String, ShoeId>,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            next_id: 1,
            records: BTreeMap::new(),
            names: HashMap::new(),
        }
    }
}

impl Table {
    pub(crate) fn get(&self, id: ShoeId) -> Option<ShoeRecord> {
        self.records.get(&id).cloned()
    }

    pub(crate) fn list(&self) -> Vec<ShoeRecord> {
        self.records.values().cloned().collect()
    }

    pub(crate) fn find_by_name(&self, name: &ShoeName) -> Option<ShoeRecord> {
        self.names
            .get(name.key())
            .and_then(|id| self.records.get(id))
            .cloned()
    }

    pub(crate) fn insert(&mut self, name: &ShoeName) -> Inserted {
        if let Some(existing) = self.find_by_name(name) {
            return Inserted::Conflict(existing);
        }

        let id = ShoeId::new(self.next_id);
        self.next_id += 1;
        let record = ShoeRecord::new(id, name);
        self.names.insert(name.key().to_string(), id);
        self.records.insert(id, record.clone());
        Inserted::Created(record)
    }

    pub(crate) fn replace(&mut self, record: &ShoeRecord) -> Result<(), StoreError> {
        match self.records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id())),
        }
    }

    pub(crate) fn remove(&mut self, id: ShoeId) -> bool {
        match self.records.remove(&id) {
            Some(record) => {
                self.names.remove(&record.name_key());
                true
            }
            None => false,
        }
    }

    pub(crate) fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            next_id: self.next_id,
            records: self
                .records
                .values()
                .map(|record| {
                    let (id, name, ratings) = record.clone().into_parts();
                    StoredRecord {
                        id: id.value(),
                        name,
                        ratings: ratings.into_iter().map(u8::from).collect(),
                    }
                })
                .collect(),
        }
    }

    /// Rebuild a table from a snapshot, revalidating every stored value.
    pub(crate) fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let mut table = Table::default();
        let mut max_id = 0;

        for stored in snapshot.records {
            let name = ShoeName::parse(&stored.name).map_err(|e| {
                StoreError::storage(format!("corrupt record {}: {}", stored.id, e))
            })?;
            let ratings = stored
                .ratings
                .into_iter()
                .map(Rating::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    StoreError::storage(format!("corrupt record {}: {}", stored.id, e))
                })?;

            let id = ShoeId::new(stored.id);
            if table.records.contains_key(&id) || table.names.contains_key(name.key()) {
                return Err(StoreError::storage(format!(
                    "corrupt data: duplicate record {} ({})",
                    stored.id, name
                )));
            }

            max_id = max_id.max(stored.id);
            table.names.insert(name.key().to_string(), id);
            table.records.insert(
                id,
                ShoeRecord::from_parts(id, name.as_str().to_string(), ratings),
            );
        }

        table.next_id = snapshot.next_id.max(max_id + 1);
        Ok(table)
    }
}

/// On-disk form of the table. The fit score is not stored; it is recomputed
/// from the history on load.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    next_id: u64,
    records: Vec<StoredRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    id: u64,
    name: String,
    ratings: Vec<u8>,
}
