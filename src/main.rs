// ABOUTME: Main entry point for the cinema booking schema tool
// ABOUTME: Applies, rolls back, or reports the status of the schema migrations

use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_system::{config::Config, db, migration::Migrator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let conn = db::connect(&config.database_url).await?;

    match command.as_str() {
        "up" => {
            Migrator::up(&conn, None).await?;
            info!("Schema is up to date");
        }
        "down" => {
            Migrator::down(&conn, None).await?;
            info!("Schema rolled back");
        }
        "fresh" => {
            Migrator::fresh(&conn).await?;
            info!("Schema dropped and recreated");
        }
        "status" => {
            Migrator::status(&conn).await?;
        }
        other => anyhow::bail!("unknown command {other:?}, expected up, down, fresh or status"),
    }

    Ok(())
}
