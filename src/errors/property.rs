use thiserror::Error;

/// Errors from property search and creation.
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("minimum price per night must not be negative, got {value}")]
    NegativeMinimumPrice { value: i64 },

    #[error("maximum price per night must not be negative, got {value}")]
    NegativeMaximumPrice { value: i64 },

    #[error("minimum price per night {minimum} exceeds maximum {maximum}")]
    InvertedPriceRange { minimum: i64, maximum: i64 },

    #[error("minimum rating must be between 0 and 5, got {value}")]
    RatingOutOfRange { value: f64 },

    #[error("result limit must be positive, got {value}")]
    InvalidLimit { value: i64 },

    #[error("property query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl PropertyError {
    /// True for errors raised by filter validation, before any statement
    /// reaches the database.
    pub fn is_validation(&self) -> bool {
        !matches!(self, PropertyError::Query(_))
    }
}
