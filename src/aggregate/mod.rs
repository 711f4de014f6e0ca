//! Aggregation policy - how the fit score follows from the rating history.
//!
//! The fit score is the arithmetic mean of the history, 0 for an empty
//! history. [`apply`] builds the complete next state of a record (history
//! plus recomputed score) as a single value, which the store then persists in
//! one step. Storage never sees a history without its matching score.

mod policy;

pub use policy::{apply, fit_score};
