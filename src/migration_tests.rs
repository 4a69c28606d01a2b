// ABOUTME: Tests for the cinema schema migration itself
// ABOUTME: Verifies table creation order, declared columns, re-run failure, and rollback

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
    use sea_orm_migration::{MigrationTrait, MigratorTrait, SchemaManager};
    use tempfile::TempDir;

    use crate::migration::{m20220922_000001_create_cinema_tables, Migrator};

    const TABLES: [&str; 6] = [
        "Movie",
        "ShowRoom",
        "SeatType",
        "ShowRoomSeat",
        "ShowsDisplay",
        "Booking",
    ];

    async fn create_test_db() -> (DatabaseConnection, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url).await.unwrap();

        Migrator::up(&db, None).await.unwrap();

        (db, temp_dir)
    }

    async fn table_names(db: &DatabaseConnection) -> Vec<String> {
        let rows = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table'".to_string(),
            ))
            .await
            .unwrap();

        rows.iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_up_creates_all_six_tables() {
        let (db, _temp_dir) = create_test_db().await;

        let names = table_names(&db).await;
        for table in TABLES {
            assert!(names.iter().any(|n| n == table), "missing table {table}");
        }
    }

    #[tokio::test]
    async fn test_booking_columns_match_declared_layout() {
        let (db, _temp_dir) = create_test_db().await;

        let rows = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "PRAGMA table_info('Booking')".to_string(),
            ))
            .await
            .unwrap();

        let mut columns = Vec::new();
        for row in &rows {
            let name: String = row.try_get("", "name").unwrap();
            let notnull: i32 = row.try_get("", "notnull").unwrap();
            let pk: i32 = row.try_get("", "pk").unwrap();
            columns.push((name, notnull, pk));
        }

        // id is the only non-nullable column and the only primary key
        assert!(columns.contains(&("id".to_string(), 1, 1)));
        for expected in [
            "payment_method",
            "paid",
            "show_display_id",
            "show_room_seat_id",
            "createdAt",
            "updatedAt",
        ] {
            assert!(
                columns.iter().any(|(name, notnull, pk)| name == expected && *notnull == 0 && *pk == 0),
                "missing nullable column {expected}"
            );
        }
    }

    #[tokio::test]
    async fn test_timestamp_columns_default_to_creation_time() {
        let (db, _temp_dir) = create_test_db().await;

        let rows = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "PRAGMA table_info('Movie')".to_string(),
            ))
            .await
            .unwrap();

        for row in &rows {
            let name: String = row.try_get("", "name").unwrap();
            if name == "createdAt" || name == "updatedAt" {
                let default: Option<String> = row.try_get("", "dflt_value").unwrap();
                let default = default.expect("audit column should carry a default");
                assert!(
                    default.to_uppercase().contains("CURRENT_TIMESTAMP"),
                    "unexpected default for {name}: {default}"
                );
            }
        }
    }

    #[tokio::test]
    async fn test_up_twice_fails_with_duplicate_table() {
        let (db, _temp_dir) = create_test_db().await;

        // Re-running the raw migration against an already-migrated database
        // must fail on the first duplicate table.
        let manager = SchemaManager::new(&db);
        let result = m20220922_000001_create_cinema_tables::Migration
            .up(&manager)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_down_drops_all_six_tables() {
        let (db, _temp_dir) = create_test_db().await;

        Migrator::down(&db, None).await.unwrap();

        let names = table_names(&db).await;
        for table in TABLES {
            assert!(!names.iter().any(|n| n == table), "table {table} survived rollback");
        }
    }

    #[tokio::test]
    async fn test_down_on_fresh_database_does_not_error() {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite:{}?mode=rwc", temp_dir.path().join("fresh.db").display());
        let db = Database::connect(&db_url).await.unwrap();

        let manager = SchemaManager::new(&db);
        m20220922_000001_create_cinema_tables::Migration
            .down(&manager)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_up_after_down_recreates_the_schema() {
        let (db, _temp_dir) = create_test_db().await;

        Migrator::down(&db, None).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let names = table_names(&db).await;
        for table in TABLES {
            assert!(names.iter().any(|n| n == table), "missing table {table}");
        }
    }
}
