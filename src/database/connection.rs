use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

use super::migrations::Migrator;

/// Longer than any process run
const NEVER: Duration = Duration::from_secs(u32::MAX as u64);

pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:")
}

/// Pool settings for a SQLite URL.
///
/// Each connection to an in-memory URL opens its own empty database, so that
/// pool holds exactly one connection which is never reaped or recycled.
pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url);

    opt.min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    if is_in_memory(database_url) {
        opt.max_connections(1).idle_timeout(NEVER).max_lifetime(NEVER);
    } else {
        // SQLite serialises writes, a small pool is plenty
        opt.max_connections(10)
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(3600));
    }

    opt
}

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(database_url)).await
}

pub fn get_database_url(database_path: Option<&str>) -> String {
    match database_path {
        Some(path) if path == ":memory:" => "sqlite::memory:".to_string(),
        Some(path) => format!("sqlite://{}?mode=rwc", path),
        None => "sqlite://cookbook.db?mode=rwc".to_string(),
    }
}

/// Bring the schema up to date on an open connection.
pub async fn setup_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
