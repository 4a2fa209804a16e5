//! Workout split selection
//!
//! Maps a days-per-week count to the ordered focus labels of one training
//! week. The returned slice's length is the week's day count.

/// Fallback split used for any unsupported frequency.
const DEFAULT_SPLIT: &[&str] = &["Push", "Pull", "Legs"];

/// Select the day focus labels for a training frequency. Supported inputs are
/// 2-6; anything else clamps to the 3-day split rather than failing.
pub fn select_split(days_per_week: u32) -> &'static [&'static str] {
  match days_per_week {
    2 => &["Upper Body", "Lower Body"],
    3 => DEFAULT_SPLIT,
    4 => &["Chest & Triceps", "Back & Biceps", "Legs", "Shoulders & Core"],
    5 => &["Chest", "Back", "Legs", "Shoulders", "Arms & Core"],
    6 => &["Chest", "Back", "Legs", "Shoulders", "Arms", "Core & Cardio"],
    _ => DEFAULT_SPLIT,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
