// ABOUTME: Library root for the cinema booking schema crate
// ABOUTME: Exposes the configuration, connection bootstrap, entities, and migrations

pub mod config;
pub mod db;
pub mod entities;
pub mod migration;

#[cfg(test)]
mod migration_tests;
