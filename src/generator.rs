//! Plan generation
//!
//! Orchestrates the remote generative draft and the deterministic template
//! path into a fully-formed five-week plan. The remote path is attempted
//! first; any failure (network, non-2xx, unparsable or malformed payload)
//! silently redirects to the template path. Which path produced the plan is
//! reported through [`PlanSource`] so callers and tests can observe the
//! decision without an error ever escaping.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::composer;
use crate::llm::{CoachClient, RemotePlan};
use crate::models::plan::{
  Environment, Exercise, FitnessGoal, FitnessLevel, WorkoutDay, WorkoutPlan, WorkoutWeek,
  PLAN_WEEKS,
};
use crate::models::progress::UserProfile;
use crate::progression::{self, DEFAULT_PRESCRIPTION};
use crate::split;

/// Which path produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
  Remote,
  Template,
}

/// Everything plan generation needs from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
  pub user_name: String,
  pub environment: Environment,
  pub level: FitnessLevel,
  pub goal: FitnessGoal,
  pub days_per_week: u32,
}

impl PlanRequest {
  pub fn from_profile(profile: &UserProfile) -> Self {
    Self {
      user_name: profile.name.clone(),
      environment: profile.environment,
      level: profile.fitness_level,
      goal: profile.fitness_goal,
      days_per_week: profile.days_per_week,
    }
  }
}

/// A generated plan together with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
  pub plan: WorkoutPlan,
  pub source: PlanSource,
}

/// Generate a plan, preferring the remote draft and falling back to the
/// deterministic template path. Never fails: the worst case is a template
/// plan. `seed` drives the template path's exercise padding, making the
/// fallback reproducible.
pub async fn generate_plan(
  client: &CoachClient,
  request: &PlanRequest,
  seed: u64,
) -> GeneratedPlan {
  match client.draft_plan(&build_prompt(request)).await {
    Ok(remote) => {
      let plan = assemble_remote_plan(remote, request);
      info!(plan = %plan.name, weeks = plan.weeks.len(), "assembled remote plan");
      GeneratedPlan { plan, source: PlanSource::Remote }
    }
    Err(e) => {
      warn!(error = %e, "remote plan generation failed, using template path");
      GeneratedPlan {
        plan: generate_template_plan(request, seed),
        source: PlanSource::Template,
      }
    }
  }
}

/// Deterministic template path: split -> composed days -> annotated exercises
/// across exactly five weeks. Cannot fail for any input; an out-of-range
/// frequency is clamped by the split selector.
pub fn generate_template_plan(request: &PlanRequest, seed: u64) -> WorkoutPlan {
  let mut rng = StdRng::seed_from_u64(seed);
  let focuses = split::select_split(request.days_per_week);

  let weeks: Vec<WorkoutWeek> = (0..PLAN_WEEKS)
    .map(|week_index| {
      let prescription = progression::prescription(request.goal, week_index);
      let days: Vec<WorkoutDay> = focuses
        .iter()
        .map(|focus| {
          let exercises = composer::compose_day(focus, request.environment, request.level, &mut rng)
            .into_iter()
            .map(|name| Exercise {
              id: Uuid::new_v4(),
              name,
              sets: prescription.sets,
              reps: prescription.reps,
              completed: false,
              notes: None,
            })
            .collect();
          WorkoutDay {
            id: Uuid::new_v4(),
            name: focus.to_string(),
            exercises,
            completed: false,
            feedback: None,
          }
        })
        .collect();
      WorkoutWeek {
        id: Uuid::new_v4(),
        name: format!("Week {}", week_index + 1),
        days,
        progression_notes: Some(
          progression::progression_note(week_index, request.goal, request.environment)
            .to_string(),
        ),
      }
    })
    .collect();

  WorkoutPlan {
    id: Uuid::new_v4(),
    name: default_plan_name(request),
    weeks,
    environment: request.environment,
    goal: request.goal,
    level: request.level,
    days_per_week: focuses.len() as u32,
    current_week: 0,
    current_day: 0,
  }
}

/// Map a remote draft into the canonical plan shape: fresh identifiers
/// everywhere, defaulted sets/reps and notes, all completion flags false.
fn assemble_remote_plan(remote: RemotePlan, request: &PlanRequest) -> WorkoutPlan {
  let weeks: Vec<WorkoutWeek> = remote
    .weeks
    .into_iter()
    .enumerate()
    .map(|(week_index, week)| {
      let days: Vec<WorkoutDay> = week
        .days
        .into_iter()
        .map(|day| {
          let exercises = day
            .exercises
            .into_iter()
            .map(|exercise| Exercise {
              id: Uuid::new_v4(),
              name: exercise.name,
              sets: exercise.sets.unwrap_or(DEFAULT_PRESCRIPTION.sets),
              reps: exercise.reps.unwrap_or(DEFAULT_PRESCRIPTION.reps),
              completed: false,
              notes: None,
            })
            .collect();
          WorkoutDay {
            id: Uuid::new_v4(),
            name: day.name,
            exercises,
            completed: false,
            feedback: None,
          }
        })
        .collect();
      WorkoutWeek {
        id: Uuid::new_v4(),
        name: week.name.unwrap_or_else(|| format!("Week {}", week_index + 1)),
        days,
        progression_notes: Some(week.progression_notes.unwrap_or_else(|| {
          progression::progression_note(week_index, request.goal, request.environment)
            .to_string()
        })),
      }
    })
    .collect();

  // The service may not honor the requested frequency; the cursor bound has
  // to reflect the week shape that actually came back.
  let days_per_week = weeks.iter().map(|week| week.days.len()).max().unwrap_or(0) as u32;

  WorkoutPlan {
    id: Uuid::new_v4(),
    name: remote.name.unwrap_or_else(|| default_plan_name(request)),
    weeks,
    environment: request.environment,
    goal: request.goal,
    level: request.level,
    days_per_week,
    current_week: 0,
    current_day: 0,
  }
}

fn default_plan_name(request: &PlanRequest) -> String {
  format!("{}'s {} Plan", request.user_name, request.goal.capitalized())
}

/// Build the natural-language prompt embedding all five parameters plus the
/// expected JSON shape.
fn build_prompt(request: &PlanRequest) -> String {
  let goal_detail = match request.goal {
    FitnessGoal::Bulk => "muscle building with strength focus",
    FitnessGoal::Cut => "fat loss with muscle preservation",
    FitnessGoal::Maintain => "general fitness and health",
  };
  let environment_detail = match request.environment {
    Environment::Gym => "Full gym access with weights, machines, and equipment",
    Environment::NoGym => "Home/bodyweight only - no equipment needed",
  };
  let exercise_rule = match request.environment {
    Environment::Gym => {
      "utilizing gym equipment like barbells, dumbbells, machines, cables, etc."
    }
    Environment::NoGym => {
      "purely bodyweight movements that can be done at home without any equipment"
    }
  };

  format!(
    r#"Create a comprehensive 5-week workout plan for {user_name}.

Requirements:
- Fitness Goal: {goal} ({goal_detail})
- Fitness Level: {level}
- Workout Environment: {environment_detail}
- Frequency: {days_per_week} days per week
- Duration: 5 weeks with progressive overload

For {environment} workouts, ensure exercises are {exercise_rule}

Structure each week with:
1. Week name (e.g., "Foundation Week", "Progression Week")
2. {days_per_week} workout days with specific focus areas
3. Each workout should have 8-12 exercises
4. Include sets and reps appropriate for the {goal} goal
5. Progressive overload notes for each week

Format as JSON with this structure:
{{
  "name": "Plan name",
  "weeks": [
    {{
      "name": "Week 1 name",
      "days": [
        {{
          "name": "Day focus (e.g., Upper Body, Push, Legs)",
          "exercises": [
            {{
              "name": "Exercise name",
              "sets": number,
              "reps": number
            }}
          ]
        }}
      ],
      "progressionNotes": "Week-specific progression guidance"
    }}
  ]
}}"#,
    user_name = request.user_name,
    goal = request.goal,
    goal_detail = goal_detail,
    level = request.level,
    environment = request.environment,
    environment_detail = environment_detail,
    days_per_week = request.days_per_week,
    exercise_rule = exercise_rule,
  )
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
