//! Change notifications for committed store mutations.
//!
//! After a create, rating or delete has been persisted the store emits one of
//! [`SHOE_CREATED`], [`SHOE_RATED`] or [`SHOE_DELETED`] with the record encoded
//! as JSON. Listeners run on the emitter's own threads after the mutation has
//! already been acknowledged, so they cannot change its outcome.
//!
//! ```ignore
//! let store = ShoeStore::in_memory();
//! store.on(fitscore::SHOE_RATED, |json| println!("rated: {}", json));
//! ```

use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

use crate::model::ShoeRecord;

pub const SHOE_CREATED: &str = "shoe.created";
pub const SHOE_RATED: &str = "shoe.rated";
pub const SHOE_DELETED: &str = "shoe.deleted";

/// Wraps an `EventEmitter` so a shared store can register and emit through `&self`.
pub struct StoreEvents {
    emitter: Mutex<EventEmitter>,
}

impl StoreEvents {
    pub fn new() -> Self {
        StoreEvents {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Register a listener. The listener receives the record as a JSON string.
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.on(event, listener);
            }
            Err(_) => tracing::warn!(event, "event emitter poisoned, listener not registered"),
        }
    }

    pub fn emit(&self, event: &str, record: &ShoeRecord) {
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(event, error = %err, "cannot encode event payload");
                return;
            }
        };

        match self.emitter.lock() {
            Ok(mut emitter) => {
                let _ = emitter.emit(event, payload);
            }
            Err(_) => tracing::warn!(event, "event emitter poisoned, event dropped"),
        }
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}
