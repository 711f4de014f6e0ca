//! Shoe records and the value types they are built from.
//!
//! A [`ShoeRecord`] is the only entity: an identifier, a case-insensitively
//! unique name, the append-only rating history and the fit score derived from
//! it. Records are immutable values; the next state after a rating is built by
//! [`crate::aggregate::apply`] and swapped into storage as a whole.

mod name;
mod rating;
mod record;

pub use name::ShoeName;
pub use rating::Rating;
pub use record::{ShoeId, ShoeRecord};
