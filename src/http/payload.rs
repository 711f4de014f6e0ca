use serde::Deserialize;

pub(crate) const SHOE_MIN_CHARS: usize = 3;
pub(crate) const SHOE_MAX_CHARS: usize = 100;

/// Body of `POST /shoes`.
#[derive(Debug, Deserialize)]
pub struct RatingPayload {
    #[serde(default)]
    pub shoe: Option<String>,
    #[serde(default, rename = "trueToSizeVal")]
    pub true_to_size_val: Option<i64>,
}

/// A payload that passed request validation.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidRating {
    pub shoe: String,
    pub value: i64,
}

impl RatingPayload {
    /// Check the request shape. Errors are messages for a 422 response.
    pub fn validate(self) -> Result<ValidRating, String> {
        let shoe = self.shoe.unwrap_or_default();
        let length = shoe.trim().chars().count();
        if length == 0 {
            return Err("shoe: cannot be blank".into());
        }
        if !(SHOE_MIN_CHARS..=SHOE_MAX_CHARS).contains(&length) {
            return Err(format!(
                "shoe: the length must be between {} and {}",
                SHOE_MIN_CHARS, SHOE_MAX_CHARS
            ));
        }

        match self.true_to_size_val {
            Some(value) if (1..=5).contains(&value) => Ok(ValidRating { shoe, value }),
            _ => Err("trueToSizeVal must be between 1 and 5".into()),
        }
    }
}
