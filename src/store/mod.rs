//! The rating aggregation store.
//!
//! [`ShoeStore`] layers the coordination rules on top of a
//! [`RecordBackend`](crate::backend::RecordBackend):
//!
//! - resolve-or-create holds a per-name lock around check-and-create, and the
//!   backend's unique insert settles any remaining race by returning the
//!   existing record;
//! - append and delete hold a per-record lock around read-modify-write, so
//!   concurrent ratings for one shoe queue up and none are lost.
//!
//! ## Example
//!
//! ```
//! use fitscore::{ShoeRepository, ShoeStore};
//!
//! let store = ShoeStore::in_memory();
//! let shoe = store.resolve_or_create("AJ 1 Mid Cool Blue").unwrap();
//! let rated = store.append_rating(shoe.id(), 5).unwrap();
//! assert_eq!(rated.fit_score(), 5.0);
//!
//! let same = store.resolve_or_create("aj 1 mid cool blue").unwrap();
//! assert_eq!(same.id(), shoe.id());
//! ```

mod repository;
mod shoe_store;

pub use repository::ShoeRepository;
pub use shoe_store::ShoeStore;
