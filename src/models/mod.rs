pub mod property;
pub mod reservation;
pub mod user;

pub use property::{CreateProperty, Property, PropertyListing, PropertySearch};
pub use reservation::GuestReservation;
pub use user::{CreateUser, User, UserResponse};
