//! Entity-specific error types for the data layer.
//!
//! Every database operation returns a typed error: validation failures are
//! raised before a statement is issued, and executor failures carry the
//! underlying `sqlx::Error`. Failures are never mapped to an empty
//! successful result.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::PropertyError;
pub use reservation::ReservationError;
pub use user::UserError;
