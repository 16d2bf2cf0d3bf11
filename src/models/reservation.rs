use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An upcoming reservation joined with the booked property and its review
/// average, as shown on a guest's reservation list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestReservation {
    pub id: i64,
    pub guest_id: i64,
    pub property_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub title: String,
    pub cost_per_night: i64,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub city: String,
    pub province: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub average_rating: f64,
}
