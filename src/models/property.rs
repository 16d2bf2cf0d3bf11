use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents.
    pub cost_per_night: i64,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property as returned by search: the stored columns plus the review
/// average computed at query time. Properties with no reviews never appear
/// here because the search joins reviews with an inner join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
    pub average_rating: f64,
}

/// Search criteria for property listings. Every field is independently
/// optional; an absent field applies no constraint at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Substring match against the city column (case-sensitive).
    pub city: Option<String>,
    /// Exact match against the owner.
    pub owner_id: Option<i64>,
    /// Inclusive lower bound on nightly price, in cents.
    pub minimum_price_per_night: Option<i64>,
    /// Inclusive upper bound on nightly price, in cents.
    pub maximum_price_per_night: Option<i64>,
    /// Inclusive lower bound on the review average, applied after
    /// aggregation.
    pub minimum_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}
