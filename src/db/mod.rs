use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub mod properties;
pub mod reservations;
pub mod users;

#[derive(Debug, Serialize, Deserialize)]
pub struct PoolHealth {
    pub size: u32,
    pub num_idle: usize,
    pub is_closed: bool,
}

/// Handle to the PostgreSQL connection pool. The pool is constructed
/// explicitly at process start and shared by cloning; all query functions
/// hang off this type.
#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_pool_options(database_url, 20, 2).await
    }

    pub async fn with_pool_options(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn pool_health(&self) -> PoolHealth {
        PoolHealth {
            size: self.pool.size(),
            num_idle: self.pool.num_idle(),
            is_closed: self.pool.is_closed(),
        }
    }

    /// Check that the pool can still hand out a connection.
    pub async fn check_pool_health(&self) -> bool {
        match tokio::time::timeout(Duration::from_secs(5), self.pool.acquire()).await {
            Ok(Ok(_conn)) => true,
            Ok(Err(e)) => {
                tracing::warn!("Database pool health check failed: {}", e);
                false
            }
            Err(_) => {
                tracing::warn!("Database pool health check timed out");
                false
            }
        }
    }

    /// Drain the pool on shutdown. In-flight queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the booking schema if it does not exist yet. Schema evolution
    /// beyond bootstrap is handled outside this crate.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) UNIQUE NOT NULL,
                password_hash VARCHAR(255) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS properties (
                id BIGSERIAL PRIMARY KEY,
                owner_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                thumbnail_photo_url VARCHAR(500) NOT NULL DEFAULT '',
                cover_photo_url VARCHAR(500) NOT NULL DEFAULT '',
                cost_per_night BIGINT NOT NULL,
                parking_spaces INT NOT NULL DEFAULT 0,
                number_of_bathrooms INT NOT NULL DEFAULT 1,
                number_of_bedrooms INT NOT NULL DEFAULT 1,
                country VARCHAR(255) NOT NULL,
                street VARCHAR(255) NOT NULL,
                city VARCHAR(255) NOT NULL,
                province VARCHAR(255) NOT NULL,
                post_code VARCHAR(255) NOT NULL,
                active BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id BIGSERIAL PRIMARY KEY,
                start_date DATE NOT NULL,
                end_date DATE NOT NULL,
                property_id BIGINT NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                guest_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS property_reviews (
                id BIGSERIAL PRIMARY KEY,
                guest_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                property_id BIGINT NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                reservation_id BIGINT REFERENCES reservations(id) ON DELETE SET NULL,
                rating SMALLINT NOT NULL CHECK (rating BETWEEN 1 AND 5),
                message TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_properties_owner_id ON properties(owner_id)"#)
            .execute(&self.pool)
            .await?;

        sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_properties_city ON properties(city)"#)
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_properties_cost_per_night ON properties(cost_per_night)"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_reservations_guest_id ON reservations(guest_id)"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_property_reviews_property_id ON property_reviews(property_id)"#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
