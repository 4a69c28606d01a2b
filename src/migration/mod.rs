// ABOUTME: SeaORM migration module for the cinema booking schema
// ABOUTME: Registers the initial table-creation migration with the Migrator

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220922_000001_create_cinema_tables::Migration),
        ]
    }
}

pub mod m20220922_000001_create_cinema_tables;
