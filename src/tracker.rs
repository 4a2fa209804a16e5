//! Plan progression tracking
//!
//! The mutation surface over the single active plan: exercise completion, day
//! completion (which advances the cursor), and per-day feedback. Every
//! operation is best-effort: an absent plan or an unknown identifier makes
//! the call a no-op rather than an error, since the UI may hold stale
//! references across a plan reset.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::plan::{DayFeedback, WorkoutDay, WorkoutPlan, WorkoutWeek};

/// Injected reward hook fired when a day is marked complete. Keeps the
/// tracker decoupled from the currency/streak slice.
pub trait RewardSink {
  fn day_completed(&mut self);
}

/// Sink that ignores completion events.
pub struct NullRewards;

impl RewardSink for NullRewards {
  fn day_completed(&mut self) {}
}

/// Owns the single active plan. Replaced wholesale on regeneration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutState {
  current_plan: Option<WorkoutPlan>,
}

impl WorkoutState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current_plan(&self) -> Option<&WorkoutPlan> {
    self.current_plan.as_ref()
  }

  /// Replace the active plan. The previous plan is discarded entirely; there
  /// is no merging of completion state.
  pub fn set_current_plan(&mut self, plan: WorkoutPlan) {
    self.current_plan = Some(plan);
  }

  /// Drop the active plan, e.g. on a settings change requiring regeneration.
  pub fn clear_plan(&mut self) {
    self.current_plan = None;
  }

  /// Set one exercise's completion flag. No-op if any identifier in the
  /// week/day/exercise chain does not resolve.
  pub fn complete_exercise(
    &mut self,
    week_id: Uuid,
    day_id: Uuid,
    exercise_id: Uuid,
    completed: bool,
  ) {
    let Some(plan) = self.current_plan.as_mut() else { return };
    let Some(week) = plan.week_mut(week_id) else { return };
    let Some(day) = week.day_mut(day_id) else { return };
    let Some(exercise) = day.exercises.iter_mut().find(|e| e.id == exercise_id) else {
      return;
    };
    exercise.completed = completed;
  }

  /// Attach subjective feedback to a day. Does not mark the day complete.
  pub fn set_day_feedback(&mut self, week_id: Uuid, day_id: Uuid, feedback: DayFeedback) {
    let Some(plan) = self.current_plan.as_mut() else { return };
    let Some(week) = plan.week_mut(week_id) else { return };
    let Some(day) = week.day_mut(day_id) else { return };
    day.feedback = Some(feedback);
  }

  /// Set a day's completion flag. When `completed` is true this advances the
  /// cursor to the next uncompleted day of that week, or to the start of the
  /// next week, and fires the reward sink. The cursor never moves backwards
  /// and never wraps past the final week.
  pub fn complete_day(
    &mut self,
    week_id: Uuid,
    day_id: Uuid,
    completed: bool,
    rewards: &mut dyn RewardSink,
  ) {
    let Some(plan) = self.current_plan.as_mut() else { return };
    let Some(week_index) = plan.weeks.iter().position(|w| w.id == week_id) else { return };
    let Some(day_index) = plan.weeks[week_index].days.iter().position(|d| d.id == day_id)
    else {
      return;
    };

    plan.weeks[week_index].days[day_index].completed = completed;
    if !completed {
      return;
    }

    let next_day = plan.weeks[week_index]
      .days
      .iter()
      .enumerate()
      .find(|(index, day)| *index > day_index && !day.completed)
      .map(|(index, _)| index);

    let proposed = match next_day {
      Some(day) => Some((week_index, day)),
      None if week_index + 1 < plan.weeks.len() => Some((week_index + 1, 0)),
      // Final week exhausted: cursor stays put
      None => None,
    };

    if let Some((week, day)) = proposed {
      if (week, day) > plan.cursor() {
        plan.current_week = week;
        plan.current_day = day;
        debug!(week, day, "advanced workout cursor");
      }
    }

    rewards.day_completed();
  }

  /// The week and day at the cursor, or `None` when no plan exists or the
  /// cursor is out of range.
  pub fn current_workout(&self) -> Option<(&WorkoutWeek, &WorkoutDay)> {
    let plan = self.current_plan.as_ref()?;
    let week = plan.weeks.get(plan.current_week)?;
    let day = week.days.get(plan.current_day)?;
    Some((week, day))
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::{generate_template_plan, PlanRequest};
  use crate::models::plan::{Environment, FitnessGoal, FitnessLevel};
  use crate::models::progress::UserProgress;

  fn three_day_state() -> WorkoutState {
    let request = PlanRequest {
      user_name: "Ana".to_string(),
      environment: Environment::NoGym,
      level: FitnessLevel::Beginner,
      goal: FitnessGoal::Maintain,
      days_per_week: 3,
    };
    let mut state = WorkoutState::new();
    state.set_current_plan(generate_template_plan(&request, 7));
    state
  }

  fn ids_at(state: &WorkoutState, week: usize, day: usize) -> (Uuid, Uuid) {
    let plan = state.current_plan().unwrap();
    (plan.weeks[week].id, plan.weeks[week].days[day].id)
  }

  #[test]
  fn test_completing_days_advances_the_cursor() {
    let mut state = three_day_state();

    let (week0, day0) = ids_at(&state, 0, 0);
    state.complete_day(week0, day0, true, &mut NullRewards);
    assert_eq!(state.current_plan().unwrap().cursor(), (0, 1));

    let (_, day1) = ids_at(&state, 0, 1);
    state.complete_day(week0, day1, true, &mut NullRewards);
    assert_eq!(state.current_plan().unwrap().cursor(), (0, 2));

    let (_, day2) = ids_at(&state, 0, 2);
    state.complete_day(week0, day2, true, &mut NullRewards);
    assert_eq!(state.current_plan().unwrap().cursor(), (1, 0));
  }

  #[test]
  fn test_final_day_of_final_week_leaves_cursor_unchanged() {
    let mut state = three_day_state();

    // Walk the cursor to the last day
    for week in 0..5 {
      for day in 0..3 {
        if (week, day) == (4, 2) {
          break;
        }
        let (week_id, day_id) = ids_at(&state, week, day);
        state.complete_day(week_id, day_id, true, &mut NullRewards);
      }
    }
    assert_eq!(state.current_plan().unwrap().cursor(), (4, 2));

    let (week_id, day_id) = ids_at(&state, 4, 2);
    state.complete_day(week_id, day_id, true, &mut NullRewards);

    // Plan exhausted: no wraparound, no error
    assert_eq!(state.current_plan().unwrap().cursor(), (4, 2));
    assert!(state.current_plan().unwrap().weeks[4].days[2].completed);
  }

  #[test]
  fn test_cursor_is_monotonic_under_out_of_order_completion() {
    let mut state = three_day_state();

    let (week1, day1_0) = ids_at(&state, 1, 0);
    state.complete_day(week1, day1_0, true, &mut NullRewards);
    assert_eq!(state.current_plan().unwrap().cursor(), (1, 1));

    // Re-completing an earlier day must not pull the cursor backwards
    let (week0, day0_0) = ids_at(&state, 0, 0);
    state.complete_day(week0, day0_0, true, &mut NullRewards);
    assert_eq!(state.current_plan().unwrap().cursor(), (1, 1));
  }

  #[test]
  fn test_unknown_identifiers_are_a_no_op() {
    let mut state = three_day_state();
    let before = state.current_plan().unwrap().clone();

    let (week0, day0) = ids_at(&state, 0, 0);
    state.complete_exercise(week0, Uuid::new_v4(), Uuid::new_v4(), true);
    state.complete_exercise(Uuid::new_v4(), day0, Uuid::new_v4(), true);
    state.set_day_feedback(week0, Uuid::new_v4(), DayFeedback::TooHard);
    state.complete_day(week0, Uuid::new_v4(), true, &mut NullRewards);

    assert_eq!(state.current_plan().unwrap(), &before);
  }

  #[test]
  fn test_operations_without_a_plan_are_a_no_op() {
    let mut state = WorkoutState::new();
    state.complete_exercise(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), true);
    state.complete_day(Uuid::new_v4(), Uuid::new_v4(), true, &mut NullRewards);
    assert!(state.current_workout().is_none());
  }

  #[test]
  fn test_exercise_completion_toggles_only_that_exercise() {
    let mut state = three_day_state();
    let (week0, day0) = ids_at(&state, 0, 0);
    let exercise_id = state.current_plan().unwrap().weeks[0].days[0].exercises[0].id;

    state.complete_exercise(week0, day0, exercise_id, true);

    let day = &state.current_plan().unwrap().weeks[0].days[0];
    assert!(day.exercises[0].completed);
    assert!(day.exercises[1..].iter().all(|e| !e.completed));
    // Completing every exercise never auto-completes the day
    assert!(!day.completed);
  }

  #[test]
  fn test_feedback_does_not_complete_the_day() {
    let mut state = three_day_state();
    let (week0, day0) = ids_at(&state, 0, 0);

    state.set_day_feedback(week0, day0, DayFeedback::JustRight);

    let day = &state.current_plan().unwrap().weeks[0].days[0];
    assert_eq!(day.feedback, Some(DayFeedback::JustRight));
    assert!(!day.completed);
    assert_eq!(state.current_plan().unwrap().cursor(), (0, 0));
  }

  #[test]
  fn test_current_workout_is_idempotent() {
    let state = three_day_state();

    let (week_a, day_a) = state.current_workout().unwrap();
    let (first_week, first_day) = (week_a.id, day_a.id);
    let (week_b, day_b) = state.current_workout().unwrap();

    assert_eq!(week_b.id, first_week);
    assert_eq!(day_b.id, first_day);
  }

  #[test]
  fn test_reward_sink_fires_on_completion() {
    let mut state = three_day_state();
    let mut progress = UserProgress::default();
    let coins_before = progress.sweat_coins;

    let (week0, day0) = ids_at(&state, 0, 0);
    state.complete_day(week0, day0, true, &mut progress);

    assert_eq!(progress.workouts_completed, 1);
    assert_eq!(progress.streak_days, 1);
    assert_eq!(progress.sweat_coins, coins_before + 22);
  }

  #[test]
  fn test_reward_sink_not_fired_for_unknown_day() {
    struct Counting(u32);
    impl RewardSink for Counting {
      fn day_completed(&mut self) {
        self.0 += 1;
      }
    }

    let mut state = three_day_state();
    let mut sink = Counting(0);
    let (week0, _) = ids_at(&state, 0, 0);

    state.complete_day(week0, Uuid::new_v4(), true, &mut sink);
    assert_eq!(sink.0, 0);

    let (_, day0) = ids_at(&state, 0, 0);
    state.complete_day(week0, day0, false, &mut sink);
    assert_eq!(sink.0, 0, "un-completing a day must not award");
  }
}
