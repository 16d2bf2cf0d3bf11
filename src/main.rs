use tracing::info;

use roost::{config::Config, db::Database, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(
        "Connecting to database (max_connections={}, min_connections={})",
        config.db_max_connections, config.db_min_connections
    );

    let db = Database::with_pool_options(
        &config.database_url,
        config.db_max_connections,
        config.db_min_connections,
    )
    .await?;

    db.init_schema().await?;
    info!("Schema ready");

    if config.seed_demo_data {
        seed::seed_demo_data(&db).await?;
    }

    let health = db.pool_health();
    info!("Pool up: {}", serde_json::to_string(&health)?);

    db.close().await;
    info!("Pool drained, shutting down");
    Ok(())
}
