//! Test utilities and helpers
//!
//! Common test infrastructure: in-memory database setup/teardown and mock
//! data factories shared by the module test suites.

use sqlx::SqlitePool;

use crate::generator::PlanRequest;
use crate::models::plan::{Environment, FitnessGoal, FitnessLevel, WorkoutPlan};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Open an in-memory SQLite database with the schema applied.
///
/// A single connection is mandatory: every additional pool connection would
/// open its own blank in-memory database.
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Shut the pool down once a test is finished with it.
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A representative generation request: 3-day bodyweight maintenance plan.
pub fn mock_plan_request() -> PlanRequest {
  PlanRequest {
    user_name: "Ana".to_string(),
    environment: Environment::NoGym,
    level: FitnessLevel::Beginner,
    goal: FitnessGoal::Maintain,
    days_per_week: 3,
  }
}

/// A complete template plan built from the mock request with a fixed seed.
pub fn mock_plan() -> WorkoutPlan {
  crate::generator::generate_template_plan(&mock_plan_request(), 42)
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'app_state'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_plan_is_well_formed() {
    let plan = mock_plan();
    assert_eq!(plan.weeks.len(), 5);
    assert_eq!(plan.days_per_week, 3);
    assert_eq!(plan.cursor(), (0, 0));
  }
}
