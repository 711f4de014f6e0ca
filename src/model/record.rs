use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Rating, ShoeName};
use crate::aggregate;

/// Stable record identifier. Assigned on creation, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeId(u64);

impl ShoeId {
    pub const fn new(value: u64) -> Self {
        ShoeId(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shoe together with its rating history and fit score.
///
/// The fit score is only ever produced by the aggregation policy from the
/// history held in the same value, so a `ShoeRecord` is always internally
/// consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoeRecord {
    id: ShoeId,
    #[serde(rename = "shoe")]
    name: String,
    #[serde(rename = "trueToSizeData")]
    ratings: Vec<Rating>,
    #[serde(rename = "trueToSizeCalculation")]
    fit_score: f64,
}

impl ShoeRecord {
    /// A freshly created record: empty history, fit score 0.
    pub(crate) fn new(id: ShoeId, name: &ShoeName) -> Self {
        ShoeRecord {
            id,
            name: name.as_str().to_string(),
            ratings: Vec::new(),
            fit_score: 0.0,
        }
    }

    /// Rebuild a record from stored parts, recomputing the fit score.
    pub(crate) fn from_parts(id: ShoeId, name: String, ratings: Vec<Rating>) -> Self {
        let fit_score = aggregate::fit_score(&ratings);
        ShoeRecord {
            id,
            name,
            ratings,
            fit_score,
        }
    }

    pub fn id(&self) -> ShoeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ratings in submission order.
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn fit_score(&self) -> f64 {
        self.fit_score
    }

    pub(crate) fn name_key(&self) -> String {
        ShoeName::key_for(&self.name)
    }

    pub(crate) fn into_parts(self) -> (ShoeId, String, Vec<Rating>) {
        (self.id, self.name, self.ratings)
    }
}
