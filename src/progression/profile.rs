//! The persisted user-profile aggregate.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The user's progression state.
///
/// Created zero-valued on first launch and mutated only through the
/// progression transitions — every other component gets a read-only
/// snapshot. Field names are camelCase on the wire and must stay stable
/// across save/load round-trips.
///
/// Invariants: `level >= 1` and always derived from `experience_points`;
/// `longest_streak >= current_streak`; `unlocked_achievements` only grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub height_cm: f64,
    pub level: u32,
    pub experience_points: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub last_workout_date: Option<NaiveDate>,
    pub coins: u32,
    #[serde(default)]
    pub unlocked_achievements: BTreeSet<String>,
}

impl UserProfile {
    /// Fresh zero-valued profile for first launch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: 0,
            weight_kg: 0.0,
            height_cm: 0.0,
            level: 1,
            experience_points: 0,
            current_streak: 0,
            longest_streak: 0,
            last_workout_date: None,
            coins: 0,
            unlocked_achievements: BTreeSet::new(),
        }
    }
}
