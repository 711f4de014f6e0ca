//! FileBackend - record storage persisted to a single snapshot file.
//!
//! Every mutation rewrites the whole table as a `bitcode` snapshot to a
//! temporary file, syncs it and renames it over the data file. If any step
//! fails the in-memory table is restored to its previous state and the call
//! reports `StorageFailure`, so a mutation is either durable and visible or
//! not applied at all.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::table::{Snapshot, Table};
use super::{Inserted, RecordBackend};
use crate::error::StoreError;
use crate::model::{ShoeId, ShoeName, ShoeRecord};

pub struct FileBackend {
    path: PathBuf,
    table: RwLock<Table>,
}

impl FileBackend {
    /// Open the data file at `path`, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = match fs::read(&path) {
            Ok(bytes) => {
                let snapshot: Snapshot = bitcode::deserialize(&bytes).map_err(|e| {
                    StoreError::storage(format!("cannot decode {}: {}", path.display(), e))
                })?;
                Table::from_snapshot(snapshot)?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Table::default(),
            Err(err) => {
                return Err(StoreError::storage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        tracing::debug!(path = %path.display(), "opened shoe data file");
        Ok(FileBackend {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self, operation: &str) -> Result<std::sync::RwLockReadGuard<'_, Table>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::storage(format!("record table poisoned during {}", operation)))
    }

    /// Run `apply` against the table and persist the result if it reports a
    /// change. On persist failure the table is rolled back.
    fn mutate<T>(
        &self,
        operation: &str,
        apply: impl FnOnce(&mut Table) -> Result<(T, bool), StoreError>,
    ) -> Result<T, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::storage(format!("record table poisoned during {}", operation)))?;

        let before = table.clone();
        let (out, changed) = apply(&mut table)?;
        if !changed {
            return Ok(out);
        }

        if let Err(err) = self.persist(&table) {
            *table = before;
            tracing::warn!(
                path = %self.path.display(),
                operation,
                error = %err,
                "persist failed, mutation rolled back"
            );
            return Err(err);
        }
        Ok(out)
    }

    fn persist(&self, table: &Table) -> Result<(), StoreError> {
        let bytes = bitcode::serialize(&table.to_snapshot())
            .map_err(|e| StoreError::storage(format!("cannot encode snapshot: {}", e)))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let write = || -> io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::storage(format!("cannot write {}: {}", self.path.display(), e))
        })
    }
}

impl RecordBackend for FileBackend {
    fn get(&self, id: ShoeId) -> Result<Option<ShoeRecord>, StoreError> {
        Ok(self.read("get")?.get(id))
    }

    fn list(&self) -> Result<Vec<ShoeRecord>, StoreError> {
        Ok(self.read("list")?.list())
    }

    fn find_by_name(&self, name: &ShoeName) -> Result<Option<ShoeRecord>, StoreError> {
        Ok(self.read("find")?.find_by_name(name))
    }

    fn insert(&self, name: &ShoeName) -> Result<Inserted, StoreError> {
        self.mutate("insert", |table| {
            let inserted = table.insert(name);
            let changed = matches!(inserted, Inserted::Created(_));
            Ok((inserted, changed))
        })
    }

    fn replace(&self, record: &ShoeRecord) -> Result<(), StoreError> {
        self.mutate("replace", |table| {
            table.replace(record)?;
            Ok(((), true))
        })
    }

    fn remove(&self, id: ShoeId) -> Result<bool, StoreError> {
        self.mutate("remove", |table| {
            let removed = table.remove(id);
            Ok((removed, removed))
        })
    }
}
