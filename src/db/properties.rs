use sqlx::postgres::PgRow;
use sqlx::Row;

use super::Database;
use crate::errors::PropertyError;
use crate::models::{CreateProperty, Property, PropertyListing, PropertySearch};

pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// One filter value, carried separately from the statement text and bound
/// by position at execution time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchParam {
    Text(String),
    Int(i64),
    Real(f64),
}

const SEARCH_SELECT: &str = "\
SELECT properties.id, properties.owner_id, properties.title, properties.description,
       properties.thumbnail_photo_url, properties.cover_photo_url, properties.cost_per_night,
       properties.parking_spaces, properties.number_of_bathrooms, properties.number_of_bedrooms,
       properties.country, properties.street, properties.city, properties.province,
       properties.post_code, properties.active,
       avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
";

/// Assemble the search statement and its ordered parameter list.
///
/// Predicates are collected as (fragment, value) pairs in a fixed order and
/// rendered at the end, so each placeholder index always equals the
/// position of its value in the parameter list. The first predicate
/// present opens with WHERE, every later one with AND, regardless of which
/// subset of filters was supplied. The limit is always the final
/// parameter. Filter values never appear in the statement text.
pub(crate) fn build_search_query(
    search: &PropertySearch,
    limit: i64,
) -> (String, Vec<SearchParam>) {
    let mut predicates: Vec<(&'static str, SearchParam)> = Vec::new();
    if let Some(city) = &search.city {
        predicates.push((
            "properties.city LIKE",
            SearchParam::Text(format!("%{}%", city)),
        ));
    }
    if let Some(owner_id) = search.owner_id {
        predicates.push(("properties.owner_id =", SearchParam::Int(owner_id)));
    }
    if let Some(minimum) = search.minimum_price_per_night {
        predicates.push(("properties.cost_per_night >=", SearchParam::Int(minimum)));
    }
    if let Some(maximum) = search.maximum_price_per_night {
        predicates.push(("properties.cost_per_night <=", SearchParam::Int(maximum)));
    }

    let mut sql = String::from(SEARCH_SELECT);
    let mut params: Vec<SearchParam> = Vec::new();

    for (fragment, value) in predicates {
        sql.push_str(if params.is_empty() { "WHERE " } else { "AND " });
        params.push(value);
        sql.push_str(&format!("{} ${}\n", fragment, params.len()));
    }

    // Required by the aggregate in the select list, filters or not.
    sql.push_str("GROUP BY properties.id\n");

    if let Some(minimum_rating) = search.minimum_rating {
        params.push(SearchParam::Real(minimum_rating));
        sql.push_str(&format!(
            "HAVING avg(property_reviews.rating) >= ${}\n",
            params.len()
        ));
    }

    sql.push_str("ORDER BY properties.cost_per_night ASC\n");
    params.push(SearchParam::Int(limit));
    sql.push_str(&format!("LIMIT ${}", params.len()));

    (sql, params)
}

pub(crate) fn validate_search(search: &PropertySearch, limit: i64) -> Result<(), PropertyError> {
    if let Some(value) = search.minimum_price_per_night {
        if value < 0 {
            return Err(PropertyError::NegativeMinimumPrice { value });
        }
    }
    if let Some(value) = search.maximum_price_per_night {
        if value < 0 {
            return Err(PropertyError::NegativeMaximumPrice { value });
        }
    }
    if let (Some(minimum), Some(maximum)) =
        (search.minimum_price_per_night, search.maximum_price_per_night)
    {
        if minimum > maximum {
            return Err(PropertyError::InvertedPriceRange { minimum, maximum });
        }
    }
    if let Some(value) = search.minimum_rating {
        if !(0.0..=5.0).contains(&value) {
            return Err(PropertyError::RatingOutOfRange { value });
        }
    }
    if limit <= 0 {
        return Err(PropertyError::InvalidLimit { value: limit });
    }
    Ok(())
}

fn listing_from_row(row: &PgRow) -> PropertyListing {
    PropertyListing {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        title: row.get("title"),
        description: row.get("description"),
        thumbnail_photo_url: row.get("thumbnail_photo_url"),
        cover_photo_url: row.get("cover_photo_url"),
        cost_per_night: row.get("cost_per_night"),
        parking_spaces: row.get("parking_spaces"),
        number_of_bathrooms: row.get("number_of_bathrooms"),
        number_of_bedrooms: row.get("number_of_bedrooms"),
        country: row.get("country"),
        street: row.get("street"),
        city: row.get("city"),
        province: row.get("province"),
        post_code: row.get("post_code"),
        active: row.get("active"),
        average_rating: row.get("average_rating"),
    }
}

impl Database {
    /// Search property listings, filtered by whatever subset of criteria is
    /// present, ordered by nightly price ascending and capped at `limit`
    /// (default 10).
    ///
    /// Listings with no reviews are absent from the results: the review
    /// join is an inner join, so the aggregate only ranges over reviewed
    /// properties.
    pub async fn search_properties(
        &self,
        search: &PropertySearch,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, PropertyError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        validate_search(search, limit)?;

        let (sql, params) = build_search_query(search, limit);
        let mut query = sqlx::query(&sql);
        for param in &params {
            query = match param {
                SearchParam::Text(value) => query.bind(value.as_str()),
                SearchParam::Int(value) => query.bind(*value),
                SearchParam::Real(value) => query.bind(*value),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.iter().map(listing_from_row).collect())
    }

    pub async fn create_property(
        &self,
        property: &CreateProperty,
    ) -> Result<Property, PropertyError> {
        let row = sqlx::query(
            r#"
            INSERT INTO properties (owner_id, title, description, thumbnail_photo_url,
                cover_photo_url, cost_per_night, street, city, province, post_code,
                country, parking_spaces, number_of_bathrooms, number_of_bedrooms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                      cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                      country, street, city, province, post_code, active
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(&self.pool)
        .await?;

        Ok(Property {
            id: row.get("id"),
            owner_id: row.get("owner_id"),
            title: row.get("title"),
            description: row.get("description"),
            thumbnail_photo_url: row.get("thumbnail_photo_url"),
            cover_photo_url: row.get("cover_photo_url"),
            cost_per_night: row.get("cost_per_night"),
            parking_spaces: row.get("parking_spaces"),
            number_of_bathrooms: row.get("number_of_bathrooms"),
            number_of_bedrooms: row.get("number_of_bedrooms"),
            country: row.get("country"),
            street: row.get("street"),
            city: row.get("city"),
            province: row.get("province"),
            post_code: row.get("post_code"),
            active: row.get("active"),
        })
    }
}
