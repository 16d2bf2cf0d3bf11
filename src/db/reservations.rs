use sqlx::Row;

use super::properties::DEFAULT_SEARCH_LIMIT;
use super::Database;
use crate::errors::ReservationError;
use crate::models::GuestReservation;

impl Database {
    /// List a guest's upcoming reservations with the booked property and
    /// its review average, capped at `limit` (default 10). Reservations on
    /// properties with no reviews are absent here for the same reason as
    /// in search: the review join is an inner join.
    pub async fn get_guest_reservations(
        &self,
        guest_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, ReservationError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if limit <= 0 {
            return Err(ReservationError::InvalidLimit { value: limit });
        }

        let rows = sqlx::query(
            r#"
            SELECT reservations.id, reservations.guest_id, reservations.property_id,
                   reservations.start_date, reservations.end_date,
                   properties.title, properties.cost_per_night, properties.thumbnail_photo_url,
                   properties.cover_photo_url, properties.city, properties.province,
                   properties.number_of_bedrooms, properties.number_of_bathrooms,
                   properties.parking_spaces,
                   avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            AND reservations.start_date >= now()
            GROUP BY properties.id, reservations.id
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let reservations = rows
            .into_iter()
            .map(|row| GuestReservation {
                id: row.get("id"),
                guest_id: row.get("guest_id"),
                property_id: row.get("property_id"),
                start_date: row.get("start_date"),
                end_date: row.get("end_date"),
                title: row.get("title"),
                cost_per_night: row.get("cost_per_night"),
                thumbnail_photo_url: row.get("thumbnail_photo_url"),
                cover_photo_url: row.get("cover_photo_url"),
                city: row.get("city"),
                province: row.get("province"),
                number_of_bedrooms: row.get("number_of_bedrooms"),
                number_of_bathrooms: row.get("number_of_bathrooms"),
                parking_spaces: row.get("parking_spaces"),
                average_rating: row.get("average_rating"),
            })
            .collect();

        Ok(reservations)
    }
}
