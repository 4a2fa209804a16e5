//! Fitness Buddy core: workout plan generation and progression engine
//!
//! Library crate behind the mobile client. Generates a five-week periodized
//! plan from the user's settings (remote generative draft with a
//! deterministic template fallback) and tracks the user's progression
//! through it. Persistence is a namespaced key-value layer over SQLite.

pub mod catalog;
pub mod composer;
pub mod db;
pub mod generator;
pub mod llm;
pub mod models;
pub mod progression;
pub mod split;
pub mod store;
pub mod tracker;

#[cfg(test)]
mod test_utils;

pub use generator::{generate_plan, generate_template_plan, GeneratedPlan, PlanRequest, PlanSource};
pub use llm::CoachClient;
pub use models::{Environment, FitnessGoal, FitnessLevel, UserProfile, UserProgress, WorkoutPlan};
pub use tracker::{RewardSink, WorkoutState};
