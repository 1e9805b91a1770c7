use sqlx::SqlitePool;
use subrecon_domain::Config;
use subrecon_infrastructure::database::create_pool;
use tracing::info;

pub async fn create_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite://{}", config.database.path);
    let pool = create_pool(&database_url).await?;

    info!(path = %config.database.path, "Scan store ready");

    Ok(pool)
}
