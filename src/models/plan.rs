//! Workout plan data model
//!
//! A plan is created once per generation request and replaces any prior plan
//! wholesale. After creation only completion flags, feedback tags, and the
//! (current_week, current_day) cursor mutate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every plan spans exactly this many weeks.
pub const PLAN_WEEKS: usize = 5;

/// ---------------------------------------------------------------------------
/// User configuration enums
/// ---------------------------------------------------------------------------

/// Whether workouts assume gym equipment or bodyweight only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
  #[serde(rename = "GYM")]
  Gym,
  #[serde(rename = "NO-GYM")]
  NoGym,
}

impl std::fmt::Display for Environment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Gym => write!(f, "GYM"),
      Self::NoGym => write!(f, "NO-GYM"),
    }
  }
}

impl std::str::FromStr for Environment {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "GYM" => Ok(Self::Gym),
      "NO-GYM" => Ok(Self::NoGym),
      _ => Err(format!("Unknown environment: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
  Bulk,
  Cut,
  Maintain,
}

impl FitnessGoal {
  /// Capitalized form used in plan display names.
  pub fn capitalized(&self) -> &'static str {
    match self {
      Self::Bulk => "Bulk",
      Self::Cut => "Cut",
      Self::Maintain => "Maintain",
    }
  }
}

impl std::fmt::Display for FitnessGoal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Bulk => write!(f, "bulk"),
      Self::Cut => write!(f, "cut"),
      Self::Maintain => write!(f, "maintain"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
  Beginner,
  Intermediate,
  Advanced,
}

impl std::fmt::Display for FitnessLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Beginner => write!(f, "beginner"),
      Self::Intermediate => write!(f, "intermediate"),
      Self::Advanced => write!(f, "advanced"),
    }
  }
}

/// Subjective feedback the user can attach to a completed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFeedback {
  TooEasy,
  JustRight,
  TooHard,
}

/// ---------------------------------------------------------------------------
/// Plan structure
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
  pub id: Uuid,
  pub name: String,
  pub sets: u32,
  pub reps: u32,
  pub completed: bool,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
  pub id: Uuid,
  /// Focus label, e.g. "Push" or "Legs".
  pub name: String,
  pub exercises: Vec<Exercise>,
  pub completed: bool,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub feedback: Option<DayFeedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutWeek {
  pub id: Uuid,
  pub name: String,
  pub days: Vec<WorkoutDay>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub progression_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
  pub id: Uuid,
  pub name: String,
  pub weeks: Vec<WorkoutWeek>,
  pub environment: Environment,
  pub goal: FitnessGoal,
  pub level: FitnessLevel,
  pub days_per_week: u32,
  /// Cursor: index of the next actionable week. Invariant: < weeks.len().
  pub current_week: usize,
  /// Cursor: index of the next actionable day. Invariant: < days_per_week.
  pub current_day: usize,
}

impl WorkoutPlan {
  /// The (current_week, current_day) cursor as a pair, for lexicographic
  /// comparison.
  pub fn cursor(&self) -> (usize, usize) {
    (self.current_week, self.current_day)
  }

  pub fn week(&self, id: Uuid) -> Option<&WorkoutWeek> {
    self.weeks.iter().find(|w| w.id == id)
  }

  pub fn week_mut(&mut self, id: Uuid) -> Option<&mut WorkoutWeek> {
    self.weeks.iter_mut().find(|w| w.id == id)
  }
}

impl WorkoutWeek {
  pub fn day(&self, id: Uuid) -> Option<&WorkoutDay> {
    self.days.iter().find(|d| d.id == id)
  }

  pub fn day_mut(&mut self, id: Uuid) -> Option<&mut WorkoutDay> {
    self.days.iter_mut().find(|d| d.id == id)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
