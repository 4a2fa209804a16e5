pub mod plan;
pub mod progress;

pub use plan::{Environment, FitnessGoal, FitnessLevel, WorkoutPlan};
pub use progress::{UserProfile, UserProgress};
