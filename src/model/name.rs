use std::fmt;

use crate::error::StoreError;

/// A validated shoe name.
///
/// Holds the display form (trimmed, as first submitted) and the lookup key
/// used for case-insensitive uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeName {
    display: String,
    key: String,
}

impl ShoeName {
    pub const MAX_CHARS: usize = 100;

    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(StoreError::InvalidName("name must not be empty".into()));
        }
        if display.chars().count() > Self::MAX_CHARS {
            return Err(StoreError::InvalidName(format!(
                "name must be at most {} characters",
                Self::MAX_CHARS
            )));
        }
        if display.chars().any(char::is_control) {
            return Err(StoreError::InvalidName(
                "name must not contain control characters".into(),
            ));
        }

        Ok(ShoeName {
            display: display.to_string(),
            key: Self::key_for(display),
        })
    }

    /// Case-insensitive comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub(crate) fn key_for(display: &str) -> String {
        display.to_lowercase()
    }
}

impl fmt::Display for ShoeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
