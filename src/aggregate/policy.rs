use crate::model::{Rating, ShoeRecord};

/// Mean of the ratings, or 0 when there are none.
///
/// The sum is exact integer arithmetic and the division happens once, so the
/// result does not depend on the order of the history.
pub fn fit_score(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();
    sum as f64 / ratings.len() as f64
}

/// The record after appending `rating`: history grown by one, score recomputed.
pub fn apply(record: &ShoeRecord, rating: Rating) -> ShoeRecord {
    let mut ratings = Vec::with_capacity(record.ratings().len() + 1);
    ratings.extend_from_slice(record.ratings());
    ratings.push(rating);
    ShoeRecord::from_parts(record.id(), record.name().to_string(), ratings)
}
