use serde::Serialize;

/// A rating value, guaranteed to be within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RatingScore(i16);

#[derive(Debug, Clone, thiserror::Error)]
#[error("Rating value must be between 1 and 5")]
pub struct InvalidRatingScore;

impl RatingScore {
    pub fn try_new(value: i16) -> Result<Self, InvalidRatingScore> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRatingScore)
        }
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}
