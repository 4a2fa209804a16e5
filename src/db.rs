use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::Path;
use tracing::info;

pub type DbPool = SqlitePool;

/// Initialize the database connection pool and run migrations.
/// `data_dir` is created if missing; the database lives at
/// `<data_dir>/fitness-buddy.db`.
pub async fn initialize_db(data_dir: &Path) -> Result<DbPool, Box<dyn std::error::Error>> {
  fs::create_dir_all(data_dir)?;
  let db_path = data_dir.join("fitness-buddy.db");
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  info!(path = %db_path.display(), "initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  Ok(pool)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
