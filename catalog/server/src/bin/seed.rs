//! Resets the catalog database and fills it with sample content.

use sea_orm::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = catalog_server::config::Config::from_env()?;

    let db = Database::connect(&config.database_url).await?;
    let summary = catalog_server::seed::seed_database(&db).await?;
    tracing::info!(
        "Seeded {} projects and {} resources into {}",
        summary.projects,
        summary.resources,
        config.database_url
    );
    Ok(())
}
