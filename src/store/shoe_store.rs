use tracing::{debug, info, warn};

use super::ShoeRepository;
use crate::aggregate;
use crate::backend::{InMemoryBackend, Inserted, RecordBackend};
use crate::error::StoreError;
use crate::lock::{InMemoryLockManager, LockManager};
use crate::model::{Rating, ShoeId, ShoeName, ShoeRecord};

#[cfg(feature = "emitter")]
use crate::emitter::{StoreEvents, SHOE_CREATED, SHOE_DELETED, SHOE_RATED};

/// Rating store over a backend `B`, serialized with locks from `M`.
///
/// Constructed explicitly and shared by reference (typically `Arc<ShoeStore<_>>`).
pub struct ShoeStore<B, M = InMemoryLockManager> {
    backend: B,
    locks: M,
    #[cfg(feature = "emitter")]
    events: StoreEvents,
}

impl ShoeStore<InMemoryBackend> {
    /// A store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        ShoeStore::new(InMemoryBackend::new())
    }
}

impl<B: RecordBackend> ShoeStore<B> {
    pub fn new(backend: B) -> Self {
        ShoeStore::with_lock_manager(backend, InMemoryLockManager::new())
    }
}

impl<B: RecordBackend, M: LockManager> ShoeStore<B, M> {
    pub fn with_lock_manager(backend: B, locks: M) -> Self {
        ShoeStore {
            backend,
            locks,
            #[cfg(feature = "emitter")]
            events: StoreEvents::new(),
        }
    }

    /// Register a listener for a committed-change event
    /// (`shoe.created`, `shoe.rated` or `shoe.deleted`).
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.events.on(event, listener);
    }

    fn name_key(name: &ShoeName) -> String {
        format!("name:{}", name.key())
    }

    fn record_key(id: ShoeId) -> String {
        format!("shoe:{}", id)
    }

    fn log_failure(operation: &str, err: &StoreError) {
        if let StoreError::StorageFailure(message) = err {
            warn!(operation, error = %message, "storage failure");
        }
    }
}

impl<B: RecordBackend, M: LockManager> ShoeRepository for ShoeStore<B, M> {
    fn get(&self, id: ShoeId) -> Result<ShoeRecord, StoreError> {
        debug!(%id, "get shoe");
        self.current(id)
    }

    fn list(&self) -> Result<Vec<ShoeRecord>, StoreError> {
        let records = self
            .backend
            .list()
            .inspect_err(|e| Self::log_failure("list", e))?;
        debug!(count = records.len(), "list shoes");
        Ok(records)
    }

    fn resolve_or_create(&self, name: &str) -> Result<ShoeRecord, StoreError> {
        let name = ShoeName::parse(name)?;

        if let Some(existing) = self.find(&name)? {
            debug!(id = %existing.id(), shoe = %name, "resolved existing shoe");
            return Ok(existing);
        }

        // Only creation takes the name lock. Late waiters re-check under it and
        // the backend's unique insert settles the rest.
        let key = Self::name_key(&name);
        let result = {
            let _guard = self.locks.acquire(&key)?;
            self.create(&name)
        };
        self.locks.forget(&key)?;
        result
    }

    fn append_rating(&self, id: ShoeId, value: i64) -> Result<ShoeRecord, StoreError> {
        let rating = Rating::new(value)?;
        let key = Self::record_key(id);
        let result = {
            let _guard = self.locks.acquire(&key)?;
            self.append(id, rating)
        };
        if matches!(result, Err(StoreError::NotFound(_))) {
            self.locks.forget(&key)?;
        }
        result
    }

    fn delete(&self, id: ShoeId) -> Result<(), StoreError> {
        let key = Self::record_key(id);
        let result = {
            let _guard = self.locks.acquire(&key)?;
            self.remove(id)
        };
        // Identifiers are never reused, so a missing record's lock is dead.
        if matches!(result, Ok(()) | Err(StoreError::NotFound(_))) {
            self.locks.forget(&key)?;
        }
        result
    }
}

impl<B: RecordBackend, M: LockManager> ShoeStore<B, M> {
    fn find(&self, name: &ShoeName) -> Result<Option<ShoeRecord>, StoreError> {
        self.backend
            .find_by_name(name)
            .inspect_err(|e| Self::log_failure("find_by_name", e))
    }

    fn current(&self, id: ShoeId) -> Result<ShoeRecord, StoreError> {
        self.backend
            .get(id)
            .inspect_err(|e| Self::log_failure("get", e))?
            .ok_or(StoreError::NotFound(id))
    }

    /// Create `name` unless a concurrent caller already did. Name lock held.
    fn create(&self, name: &ShoeName) -> Result<ShoeRecord, StoreError> {
        if let Some(existing) = self.find(name)? {
            debug!(id = %existing.id(), shoe = %name, "resolved shoe created concurrently");
            return Ok(existing);
        }

        match self
            .backend
            .insert(name)
            .inspect_err(|e| Self::log_failure("create", e))?
        {
            Inserted::Created(record) => {
                info!(id = %record.id(), shoe = %record.name(), "created shoe record");
                #[cfg(feature = "emitter")]
                self.events.emit(SHOE_CREATED, &record);
                Ok(record)
            }
            Inserted::Conflict(existing) => {
                warn!(id = %existing.id(), shoe = %name, "name taken on insert, using existing record");
                Ok(existing)
            }
        }
    }

    /// Record lock held.
    fn append(&self, id: ShoeId, rating: Rating) -> Result<ShoeRecord, StoreError> {
        let current = self.current(id)?;
        let next = aggregate::apply(&current, rating);
        self.backend
            .replace(&next)
            .inspect_err(|e| Self::log_failure("append_rating", e))?;

        debug!(
            %id,
            rating = rating.value(),
            count = next.ratings().len(),
            fit_score = next.fit_score(),
            "appended rating"
        );
        #[cfg(feature = "emitter")]
        self.events.emit(SHOE_RATED, &next);
        Ok(next)
    }

    /// Record lock held.
    fn remove(&self, id: ShoeId) -> Result<(), StoreError> {
        let _existing = self.current(id)?;
        if !self
            .backend
            .remove(id)
            .inspect_err(|e| Self::log_failure("delete", e))?
        {
            return Err(StoreError::NotFound(id));
        }
        info!(%id, "deleted shoe record");
        #[cfg(feature = "emitter")]
        self.events.emit(SHOE_DELETED, &_existing);
        Ok(())
    }
}
