//! Workout plan data contracts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback focus when the agent omits one.
pub const DEFAULT_FOCUS: &str = "General";

/// Difficulty bounds for a plan (inclusive).
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// A single exercise within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: u32,
    /// Range or count, e.g. "8-12" or "15".
    pub reps: String,
    /// Rest duration, e.g. "60s" or "2 min".
    pub rest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A generated workout plan.
///
/// Identity within a batch is the `name`, matched case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    /// 1 (easiest) to 5 (hardest).
    pub difficulty: u8,
    pub focus: String,
    pub exercises: Vec<ExerciseSpec>,
}

/// A plan candidate as the agent emits it — optional fields not yet
/// defaulted, difficulty not yet clamped.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanCandidate {
    pub name: String,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseSpec>,
}

impl PlanCandidate {
    /// Assemble the final record, defaulting missing optional fields
    /// rather than failing.
    pub fn into_plan(self) -> WorkoutPlan {
        WorkoutPlan {
            id: Uuid::new_v4(),
            name: self.name,
            difficulty: self
                .difficulty
                .unwrap_or(3)
                .clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            focus: self
                .focus
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FOCUS.to_string()),
            exercises: self.exercises,
        }
    }
}

/// What the user wants out of generated plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Training goal, e.g. "build muscle", "lose weight".
    pub goal: String,
    /// Self-reported experience: "beginner", "intermediate", "advanced".
    pub experience: String,
    /// Available equipment, e.g. ["dumbbells", "pull-up bar"].
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Minutes available per session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_per_session: Option<u32>,
}
