//! User settings and gamification progress slices
//!
//! These are the two state slices outside the plan itself: the profile that
//! feeds plan generation, and the progress counters (streak, currency) the
//! reward system mutates when days are completed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::plan::{Environment, FitnessGoal, FitnessLevel};

/// Coins awarded for any completed day, before the streak bonus.
pub const BASE_DAY_REWARD: u32 = 20;
/// The streak bonus is capped at this many coins.
pub const STREAK_BONUS_CAP: u32 = 10;
/// New users start with some coins to spend.
const STARTING_COINS: u32 = 100;

/// Onboarding output: everything plan generation needs to know about the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  pub name: String,
  pub fitness_level: FitnessLevel,
  pub fitness_goal: FitnessGoal,
  pub environment: Environment,
  pub days_per_week: u32,
  pub onboarding_completed: bool,
}

impl Default for UserProfile {
  fn default() -> Self {
    Self {
      name: String::new(),
      fitness_level: FitnessLevel::Beginner,
      fitness_goal: FitnessGoal::Maintain,
      environment: Environment::NoGym,
      days_per_week: 3,
      onboarding_completed: false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
  pub workouts_completed: u32,
  pub streak_days: u32,
  pub longest_streak: u32,
  pub sweat_coins: u32,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub last_workout_date: Option<NaiveDate>,
}

impl Default for UserProgress {
  fn default() -> Self {
    Self {
      workouts_completed: 0,
      streak_days: 0,
      longest_streak: 0,
      sweat_coins: STARTING_COINS,
      last_workout_date: None,
    }
  }
}

impl UserProgress {
  pub fn add_workout(&mut self, date: NaiveDate) {
    self.workouts_completed += 1;
    self.last_workout_date = Some(date);
  }

  pub fn add_coins(&mut self, amount: u32) {
    self.sweat_coins += amount;
  }

  /// Spending floors at zero rather than rejecting the purchase; the shop UI
  /// is responsible for affordability checks.
  pub fn spend_coins(&mut self, amount: u32) {
    self.sweat_coins = self.sweat_coins.saturating_sub(amount);
  }

  pub fn update_streak(&mut self) {
    self.streak_days += 1;
    self.longest_streak = self.longest_streak.max(self.streak_days);
  }

  pub fn reset_streak(&mut self) {
    self.streak_days = 0;
  }
}

/// Coins earned for completing a day: flat base plus a capped streak bonus.
pub fn day_completion_reward(streak_days: u32) -> u32 {
  BASE_DAY_REWARD + (streak_days * 2).min(STREAK_BONUS_CAP)
}

impl crate::tracker::RewardSink for UserProgress {
  fn day_completed(&mut self) {
    self.add_workout(chrono::Utc::now().date_naive());
    self.update_streak();
    self.add_coins(day_completion_reward(self.streak_days));
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tracker::RewardSink;

  #[test]
  fn test_defaults_match_onboarding() {
    let profile = UserProfile::default();
    assert_eq!(profile.fitness_level, FitnessLevel::Beginner);
    assert_eq!(profile.environment, Environment::NoGym);
    assert_eq!(profile.days_per_week, 3);
    assert!(!profile.onboarding_completed);

    let progress = UserProgress::default();
    assert_eq!(progress.sweat_coins, STARTING_COINS);
    assert_eq!(progress.streak_days, 0);
  }

  #[test]
  fn test_spend_coins_floors_at_zero() {
    let mut progress = UserProgress::default();
    progress.spend_coins(STARTING_COINS + 50);
    assert_eq!(progress.sweat_coins, 0);
  }

  #[test]
  fn test_streak_tracks_longest() {
    let mut progress = UserProgress::default();
    for _ in 0..4 {
      progress.update_streak();
    }
    progress.reset_streak();
    progress.update_streak();

    assert_eq!(progress.streak_days, 1);
    assert_eq!(progress.longest_streak, 4);
  }

  #[test]
  fn test_day_completion_reward_caps_streak_bonus() {
    assert_eq!(day_completion_reward(0), 20);
    assert_eq!(day_completion_reward(1), 22);
    assert_eq!(day_completion_reward(3), 26);
    assert_eq!(day_completion_reward(5), 30);
    // Bonus never exceeds 10 no matter how long the streak runs
    assert_eq!(day_completion_reward(50), 30);
  }

  #[test]
  fn test_reward_sink_awards_coins_and_advances_streak() {
    let mut progress = UserProgress::default();
    progress.day_completed();

    assert_eq!(progress.workouts_completed, 1);
    assert_eq!(progress.streak_days, 1);
    assert!(progress.last_workout_date.is_some());
    // Base 20 + streak bonus min(10, 1 * 2) = 22
    assert_eq!(progress.sweat_coins, STARTING_COINS + 22);
  }
}
