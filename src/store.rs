//! Namespaced key-value persistence for app state slices
//!
//! Each slice serializes to one JSON payload under a fixed namespace and
//! rehydrates verbatim on restart. The contract is purely structural: what
//! goes in comes back out, identifiers and cursor included.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;

pub const WORKOUT_NAMESPACE: &str = "fitness-buddy-workout";
pub const USER_NAMESPACE: &str = "fitness-buddy-user";
pub const PROGRESS_NAMESPACE: &str = "fitness-buddy-progress";

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),
}

/// Persist a state slice under its namespace, replacing any prior payload.
pub async fn save_state<T: Serialize>(
  pool: &SqlitePool,
  namespace: &str,
  value: &T,
) -> Result<(), StoreError> {
  let payload = serde_json::to_string(value)?;

  sqlx::query(
    r#"
    INSERT INTO app_state (namespace, payload, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(namespace) DO UPDATE SET
      payload = excluded.payload,
      updated_at = excluded.updated_at
    "#,
  )
  .bind(namespace)
  .bind(payload)
  .bind(Utc::now().to_rfc3339())
  .execute(pool)
  .await?;

  Ok(())
}

/// Load a state slice, or `None` if the namespace has never been written.
pub async fn load_state<T: DeserializeOwned>(
  pool: &SqlitePool,
  namespace: &str,
) -> Result<Option<T>, StoreError> {
  let row: Option<(String,)> =
    sqlx::query_as("SELECT payload FROM app_state WHERE namespace = ?1")
      .bind(namespace)
      .fetch_optional(pool)
      .await?;

  row
    .map(|(payload,)| serde_json::from_str(&payload))
    .transpose()
    .map_err(Into::into)
}

/// Remove a slice entirely, e.g. on a user-initiated reset.
pub async fn clear_state(pool: &SqlitePool, namespace: &str) -> Result<(), StoreError> {
  sqlx::query("DELETE FROM app_state WHERE namespace = ?1")
    .bind(namespace)
    .execute(pool)
    .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
