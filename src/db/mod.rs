//! Database module for SQLite persistence.
//!
//! The relational backend: one `employees` table behind a connection pool,
//! with embedded migrations and idempotent seed data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations and insert seed rows.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // INTEGER PRIMARY KEY rowid assignment gives max(id) + 1, matching the
    // in-memory store's identifier policy.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            job TEXT,
            country TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_employees_name ON employees(name)")
        .execute(pool)
        .await?;

    // Seed data, inserted once
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO employees (id, name, job, country, created_at)
        VALUES
            (1, 'Zhiji Wang', 'Tiktokerist', 'China', datetime('now')),
            (2, 'Sandara Park', 'Dancerist', 'South Korea', datetime('now')),
            (3, 'Bert Nguyen', 'Dancerist', 'Vietnam', datetime('now'));
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
