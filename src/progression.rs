//! Goal-Driven Progression Annotator
//!
//! Assigns the weekly set/rep prescription for every exercise in a day and
//! produces the human-readable progression note for a week.
//!
//! Key principles:
//! - Prescriptions are uniform across a day for a given week
//! - Reps climb by exactly one per week within a goal; sets never change
//! - Note tracks move from form focus (week 0) to intensity/PR focus (week 4)

use serde::{Deserialize, Serialize};

use crate::models::plan::{Environment, FitnessGoal};

/// Sets and reps prescribed for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
  pub sets: u32,
  pub reps: u32,
}

/// Default used when a remote-generated exercise omits sets or reps.
pub const DEFAULT_PRESCRIPTION: Prescription = Prescription { sets: 3, reps: 10 };

/// Weekly prescription for a goal. Week indices run 0-4; later indices keep
/// extending the same arithmetic rather than failing.
pub fn prescription(goal: FitnessGoal, week_index: usize) -> Prescription {
  let week = week_index as u32;
  match goal {
    // Strength focus: heavy, 6-10 reps across the five weeks
    FitnessGoal::Bulk => Prescription { sets: 4, reps: 6 + week },
    // Fat loss: higher volume, 12-16 reps
    FitnessGoal::Cut => Prescription { sets: 3, reps: 12 + week },
    // General fitness: 8-12 reps
    FitnessGoal::Maintain => Prescription { sets: 3, reps: 8 + week },
  }
}

/// The weekly guidance string for a (goal, environment) track. The cut track
/// is environment-independent.
pub fn progression_note(
  week_index: usize,
  goal: FitnessGoal,
  environment: Environment,
) -> &'static str {
  let track: &[&str; 5] = match (goal, environment) {
    (FitnessGoal::Bulk, Environment::Gym) => &[
      "Focus on form and getting comfortable with the weights.",
      "Increase weights by 5-10% on compound lifts if possible.",
      "Add an extra set to your main lifts this week.",
      "Try to increase weights again on all exercises.",
      "Push for personal records on your main lifts!",
    ],
    (FitnessGoal::Bulk, Environment::NoGym) => &[
      "Focus on form and getting comfortable with the movements.",
      "Increase reps or add pauses to make exercises harder.",
      "Try more challenging variations of basic exercises.",
      "Add explosive movements and increase time under tension.",
      "Master advanced variations and increase workout intensity!",
    ],
    (FitnessGoal::Cut, _) => &[
      "Keep rest periods short (30-60 seconds) to maintain elevated heart rate.",
      "Add 5 minutes of HIIT after your workout.",
      "Increase reps by 2 on each exercise if possible.",
      "Add supersets to increase workout intensity.",
      "Focus on form while maintaining the higher rep ranges.",
    ],
    (FitnessGoal::Maintain, Environment::Gym) => &[
      "Focus on proper form and technique for all exercises.",
      "Slightly increase weights if the previous week felt comfortable.",
      "Add an extra rep to each set if possible.",
      "Try to increase either weight or reps on all exercises.",
      "Reflect on your progress and adjust for your next cycle.",
    ],
    (FitnessGoal::Maintain, Environment::NoGym) => &[
      "Focus on proper form and controlled movements.",
      "Increase reps or hold positions longer if exercises feel easy.",
      "Try more challenging variations of the exercises.",
      "Add pauses or slower tempos to increase difficulty.",
      "Master the movements and prepare for advanced variations.",
    ],
  };
  track[week_index.min(track.len() - 1)]
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  const GOALS: [FitnessGoal; 3] = [FitnessGoal::Bulk, FitnessGoal::Cut, FitnessGoal::Maintain];

  #[test]
  fn test_reps_increase_by_one_per_week() {
    for goal in GOALS {
      for week in 0..4 {
        let current = prescription(goal, week);
        let next = prescription(goal, week + 1);
        assert_eq!(next.reps, current.reps + 1, "{:?} week {}", goal, week);
      }
    }
  }

  #[test]
  fn test_sets_are_constant_within_a_goal() {
    for goal in GOALS {
      let sets = prescription(goal, 0).sets;
      for week in 1..5 {
        assert_eq!(prescription(goal, week).sets, sets, "{:?}", goal);
      }
    }
  }

  #[test]
  fn test_goal_rep_ranges() {
    assert_eq!(prescription(FitnessGoal::Bulk, 0), Prescription { sets: 4, reps: 6 });
    assert_eq!(prescription(FitnessGoal::Bulk, 4), Prescription { sets: 4, reps: 10 });
    assert_eq!(prescription(FitnessGoal::Cut, 0), Prescription { sets: 3, reps: 12 });
    assert_eq!(prescription(FitnessGoal::Cut, 4), Prescription { sets: 3, reps: 16 });
    assert_eq!(prescription(FitnessGoal::Maintain, 0), Prescription { sets: 3, reps: 8 });
    assert_eq!(prescription(FitnessGoal::Maintain, 4), Prescription { sets: 3, reps: 12 });
  }

  #[test]
  fn test_notes_differ_per_week_within_a_track() {
    for goal in GOALS {
      for env in [Environment::Gym, Environment::NoGym] {
        let notes: Vec<&str> = (0..5).map(|w| progression_note(w, goal, env)).collect();
        let mut unique = notes.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 5, "{:?}/{:?}", goal, env);
      }
    }
  }

  #[test]
  fn test_cut_track_ignores_environment() {
    for week in 0..5 {
      assert_eq!(
        progression_note(week, FitnessGoal::Cut, Environment::Gym),
        progression_note(week, FitnessGoal::Cut, Environment::NoGym)
      );
    }
  }

  #[test]
  fn test_week_zero_is_form_focused_and_week_four_pushes_intensity() {
    let first = progression_note(0, FitnessGoal::Bulk, Environment::Gym);
    let last = progression_note(4, FitnessGoal::Bulk, Environment::Gym);
    assert!(first.contains("form"));
    assert!(last.contains("personal records"));
  }

  #[test]
  fn test_out_of_range_week_clamps_to_final_note() {
    assert_eq!(
      progression_note(9, FitnessGoal::Maintain, Environment::Gym),
      progression_note(4, FitnessGoal::Maintain, Environment::Gym)
    );
  }
}
