//! Day composition: focus label -> 8-10 distinct exercise names
//!
//! Prefills from the catalog by keyword-matching the focus label, then pads to
//! the minimum count with a shuffle-and-take over the remaining catalog
//! entries. Padding is bounded (one pass over a finite pool) and deterministic
//! under a supplied RNG, unlike a retry-until-new random draw.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{self, MuscleGroup, MUSCLE_GROUPS};
use crate::models::plan::{Environment, FitnessLevel};

pub const MIN_EXERCISES: usize = 8;
pub const MAX_EXERCISES: usize = 10;

/// Compose the exercise list for one workout day.
///
/// An empty or unmatched focus label degenerates to pure padding; the catalog
/// guarantees enough entries for that to still reach the minimum.
pub fn compose_day<R: Rng>(
  focus: &str,
  environment: Environment,
  level: FitnessLevel,
  rng: &mut R,
) -> Vec<String> {
  let mut names: Vec<&'static str> = Vec::with_capacity(MAX_EXERCISES);

  let pull = |group: MuscleGroup| catalog::exercises(environment, level, group);

  // Compound focus labels override the per-group keyword matches.
  if focus.contains("Upper") {
    extend_unique(&mut names, pull(MuscleGroup::Chest), 3);
    extend_unique(&mut names, pull(MuscleGroup::Back), 3);
    extend_unique(&mut names, pull(MuscleGroup::Shoulders), 2);
    extend_unique(&mut names, pull(MuscleGroup::Arms), 2);
  } else if focus.contains("Lower") {
    extend_unique(&mut names, pull(MuscleGroup::Legs), 6);
    extend_unique(&mut names, pull(MuscleGroup::Core), 2);
  } else if focus.contains("Push") {
    extend_unique(&mut names, pull(MuscleGroup::Chest), 4);
    extend_unique(&mut names, pull(MuscleGroup::Shoulders), 3);
    // First arm entries are triceps-biased in the catalog ordering
    extend_unique(&mut names, pull(MuscleGroup::Arms), 2);
  } else if focus.contains("Pull") {
    extend_unique(&mut names, pull(MuscleGroup::Back), 4);
    // Skip the first arm entry to bias toward biceps work
    let arms = pull(MuscleGroup::Arms);
    extend_unique(&mut names, &arms[1..arms.len().min(4)], 3);
    extend_unique(&mut names, pull(MuscleGroup::Core), 2);
  } else {
    if focus.contains("Chest") {
      extend_unique(&mut names, pull(MuscleGroup::Chest), 4);
    }
    if focus.contains("Back") {
      extend_unique(&mut names, pull(MuscleGroup::Back), 4);
    }
    if focus.contains("Legs") {
      extend_unique(&mut names, pull(MuscleGroup::Legs), 4);
    }
    if focus.contains("Shoulders") {
      extend_unique(&mut names, pull(MuscleGroup::Shoulders), 3);
    }
    if focus.contains("Arms") {
      extend_unique(&mut names, pull(MuscleGroup::Arms), 3);
    }
    if focus.contains("Core") {
      extend_unique(&mut names, pull(MuscleGroup::Core), 3);
    }
  }

  if names.len() < MIN_EXERCISES {
    pad_from_catalog(&mut names, environment, level, rng);
  }

  names.truncate(MAX_EXERCISES);
  names.into_iter().map(String::from).collect()
}

/// Append up to `take` entries from `source`, skipping names already present.
fn extend_unique(names: &mut Vec<&'static str>, source: &[&'static str], take: usize) {
  for &name in source.iter().take(take) {
    if !names.contains(&name) {
      names.push(name);
    }
  }
}

/// Pad to the minimum count from a shuffled pool of every unused catalog entry.
fn pad_from_catalog<R: Rng>(
  names: &mut Vec<&'static str>,
  environment: Environment,
  level: FitnessLevel,
  rng: &mut R,
) {
  let mut pool: Vec<&'static str> = MUSCLE_GROUPS
    .iter()
    .flat_map(|&group| catalog::exercises(environment, level, group).iter().copied())
    .filter(|name| !names.contains(name))
    .collect();
  pool.shuffle(rng);

  for name in pool {
    if names.len() >= MIN_EXERCISES {
      break;
    }
    // A name can appear under more than one muscle group
    if !names.contains(&name) {
      names.push(name);
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
