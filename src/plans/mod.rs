//! Workout plan generation — chunked batches of uniquely-named plans.

pub mod generator;
pub mod model;
pub mod prompts;

pub use generator::{GenerationConfig, PlanGenerator};
pub use model::{ExerciseSpec, PlanCandidate, UserPreferences, WorkoutPlan, DEFAULT_FOCUS};
