use crate::error::StoreError;
use crate::model::{Rating, ShoeId, ShoeRecord};

/// The operations the rating store offers its callers.
///
/// Implemented by [`crate::ShoeStore`]; the HTTP adapter is generic over this
/// trait and owns no business logic.
pub trait ShoeRepository: Send + Sync {
    /// Fetch a record by identifier.
    fn get(&self, id: ShoeId) -> Result<ShoeRecord, StoreError>;

    /// All records, ordered by identifier. Empty store yields an empty vector.
    fn list(&self) -> Result<Vec<ShoeRecord>, StoreError>;

    /// Case-insensitive lookup by name, creating an empty record if none exists.
    fn resolve_or_create(&self, name: &str) -> Result<ShoeRecord, StoreError>;

    /// Append a rating and recompute the fit score as one atomic step.
    fn append_rating(&self, id: ShoeId, value: i64) -> Result<ShoeRecord, StoreError>;

    /// Remove a record and its whole history.
    fn delete(&self, id: ShoeId) -> Result<(), StoreError>;

    /// Rate a shoe by name: resolve (or create) it, then append the rating.
    ///
    /// The value is checked first so an invalid rating never creates a record.
    /// If the resolved record is deleted before the append lands, the name is
    /// resolved once more, which creates a fresh record.
    fn rate(&self, name: &str, value: i64) -> Result<ShoeRecord, StoreError> {
        Rating::new(value)?;
        let record = self.resolve_or_create(name)?;
        match self.append_rating(record.id(), value) {
            Err(StoreError::NotFound(_)) => {
                let record = self.resolve_or_create(name)?;
                self.append_rating(record.id(), value)
            }
            other => other,
        }
    }
}
