//! Crowd-sourced true-to-size ratings for shoes.
//!
//! Each rater submits a score from 1 to 5 for a named shoe. The store keeps,
//! per shoe, the full rating history and a fit score that is always the mean
//! of that history.
//!
//! - [`ShoeStore`] resolves names to records, appends ratings and deletes
//!   records, serializing concurrent callers with keyed locks.
//! - [`aggregate`] defines the fit score and builds each next record state.
//! - [`RecordBackend`] is the storage seam: [`InMemoryBackend`] or the
//!   snapshot-file [`FileBackend`].
//! - [`http`] (feature `http`) exposes the store as a small REST API.

pub mod aggregate;
mod backend;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
pub mod lock;
mod model;
mod store;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod logging;

pub use backend::{FileBackend, InMemoryBackend, Inserted, RecordBackend};
#[cfg(feature = "emitter")]
pub use emitter::{StoreEvents, SHOE_CREATED, SHOE_DELETED, SHOE_RATED};
pub use error::StoreError;
pub use model::{Rating, ShoeId, ShoeName, ShoeRecord};
pub use store::{ShoeRepository, ShoeStore};

#[cfg(feature = "server")]
pub use config::{CliArgs, LogFormat, ServerConfig};
#[cfg(feature = "server")]
pub use logging::init_logging;
