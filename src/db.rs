// ABOUTME: Database connection bootstrap for the cinema schema
// ABOUTME: Connects via SeaORM and optionally brings the schema up to date

use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::migration::Migrator;

pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    info!("Database connected");
    Ok(conn)
}

pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection> {
    let conn = connect(database_url).await?;
    Migrator::up(&conn, None).await?;
    info!("Schema is up to date");
    Ok(conn)
}
