use thiserror::Error;

/// Errors from reservation listing.
#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("result limit must be positive, got {value}")]
    InvalidLimit { value: i64 },

    #[error("reservation query failed: {0}")]
    Query(#[from] sqlx::Error),
}
