use anyhow::Result;
use tracing::info;

use crate::db::Database;
use crate::models::{CreateProperty, CreateUser};

const DEMO_HOST_EMAIL: &str = "host@demo.roost.dev";
const DEMO_GUEST_EMAIL: &str = "guest@demo.roost.dev";

/// Seed a demo host, guest, and a few reviewed listings so a fresh
/// database has something to search. Safe to run repeatedly.
pub async fn seed_demo_data(db: &Database) -> Result<()> {
    if db.get_user_by_email(DEMO_HOST_EMAIL).await?.is_some() {
        info!("Demo data already present, skipping seed");
        return Ok(());
    }

    let host = db
        .create_user(CreateUser {
            name: "Demo Host".to_string(),
            email: DEMO_HOST_EMAIL.to_string(),
            password: "demo-password".to_string(),
        })
        .await?;

    let guest = db
        .create_user(CreateUser {
            name: "Demo Guest".to_string(),
            email: DEMO_GUEST_EMAIL.to_string(),
            password: "demo-password".to_string(),
        })
        .await?;

    let listings = [
        ("Harbourview Loft", "Vancouver", 18500_i64, 5_i16),
        ("Garden Lane Suite", "Vancouver", 9900, 4),
        ("Prairie Sky Cabin", "Saskatoon", 7500, 3),
    ];

    for (title, city, cost_per_night, rating) in listings {
        let property = db
            .create_property(&CreateProperty {
                owner_id: host.id,
                title: title.to_string(),
                description: format!("{} in {}", title, city),
                thumbnail_photo_url: String::new(),
                cover_photo_url: String::new(),
                cost_per_night,
                street: "100 Demo Street".to_string(),
                city: city.to_string(),
                province: "BC".to_string(),
                post_code: "V5K 0A1".to_string(),
                country: "Canada".to_string(),
                parking_spaces: 1,
                number_of_bathrooms: 1,
                number_of_bedrooms: 2,
            })
            .await?;

        sqlx::query(
            r#"
            INSERT INTO property_reviews (guest_id, property_id, rating, message)
            VALUES ($1, $2, $3, 'Seeded review')
            "#,
        )
        .bind(guest.id)
        .bind(property.id)
        .bind(rating)
        .execute(db.get_pool())
        .await?;

        info!("Seeded listing '{}' in {}", title, city);
    }

    info!("Demo data seeded (host id {}, guest id {})", host.id, guest.id);
    Ok(())
}
