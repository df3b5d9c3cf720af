//! Progression transitions — pure functions over the profile aggregate.
//!
//! Each transition takes the profile by value and returns a new one; no
//! in-place mutation, no failure path (total functions over well-formed
//! input). Composition order is fixed: streak, experience, coins, then
//! achievements — achievement conditions that read the streak must observe
//! the post-update value.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::progression::achievements::{Achievement, ProgressStats};
use crate::progression::profile::UserProfile;

/// Per-action award amounts.
#[derive(Debug, Clone)]
pub struct ProgressionConfig {
    pub xp_per_workout: u32,
    pub coins_per_workout: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_per_workout: 50,
            coins_per_workout: 10,
        }
    }
}

/// Outcome of a completed workout.
#[derive(Debug, Clone)]
pub struct WorkoutCompletion {
    pub profile: UserProfile,
    /// Achievement ids unlocked by this action, each reported exactly once.
    pub newly_unlocked: Vec<String>,
    pub leveled_up: bool,
}

/// Level derived from experience: `floor(sqrt(xp / 100)) + 1`.
///
/// Level is never stored independently — recomputing from experience must
/// reproduce the same value.
pub fn level_for_experience(experience_points: u32) -> u32 {
    (f64::from(experience_points) / 100.0).sqrt().floor() as u32 + 1
}

/// Advance the streak for a workout logged `today`.
///
/// One day since the last workout continues the streak; a longer gap
/// restarts it at 1; a repeat on the same day changes nothing (idempotent).
/// A profile with no prior workout starts at 1.
pub fn update_streak(mut profile: UserProfile, today: NaiveDate) -> UserProfile {
    match profile.last_workout_date {
        Some(last) => {
            let diff_days = (today - last).num_days();
            if diff_days == 1 {
                profile.current_streak += 1;
            } else if diff_days > 1 {
                debug!(gap_days = diff_days, "Streak broken, restarting at 1");
                profile.current_streak = 1;
            }
            // diff_days == 0: already logged today, counters untouched.
        }
        None => profile.current_streak = 1,
    }

    profile.longest_streak = profile.longest_streak.max(profile.current_streak);
    profile.last_workout_date = Some(today);
    profile
}

/// Add experience and re-derive the level.
pub fn add_experience(mut profile: UserProfile, delta: u32) -> UserProfile {
    profile.experience_points += delta;
    profile.level = level_for_experience(profile.experience_points);
    profile
}

/// Award coins.
pub fn award_coins(mut profile: UserProfile, amount: u32) -> UserProfile {
    profile.coins += amount;
    profile
}

/// Evaluate the catalog and unlock newly-qualified achievements.
///
/// Edge-triggered: ids already in the profile's unlocked set are never
/// re-emitted. Returns the updated profile and the new ids in catalog order.
pub fn check_achievements(
    mut profile: UserProfile,
    stats: &ProgressStats,
    catalog: &[Achievement],
) -> (UserProfile, Vec<String>) {
    let mut newly_unlocked = Vec::new();
    for achievement in catalog {
        if profile.unlocked_achievements.contains(achievement.id) {
            continue;
        }
        if achievement.condition.is_met(&profile, stats) {
            profile.unlocked_achievements.insert(achievement.id.to_string());
            newly_unlocked.push(achievement.id.to_string());
            info!(id = achievement.id, name = achievement.name, "Achievement unlocked");
        }
    }
    (profile, newly_unlocked)
}

/// Composes the transitions for one tracked workout completion.
pub struct ProgressionEngine {
    config: ProgressionConfig,
    catalog: Vec<Achievement>,
}

impl ProgressionEngine {
    pub fn new(config: ProgressionConfig, catalog: Vec<Achievement>) -> Self {
        Self { config, catalog }
    }

    /// Apply the full transition sequence for a workout completed `today`.
    ///
    /// `stats` must already include this workout (the caller tracks the
    /// workout log).
    pub fn complete_workout(
        &self,
        profile: UserProfile,
        today: NaiveDate,
        stats: &ProgressStats,
    ) -> WorkoutCompletion {
        let level_before = profile.level;

        let profile = update_streak(profile, today);
        let profile = add_experience(profile, self.config.xp_per_workout);
        let profile = award_coins(profile, self.config.coins_per_workout);
        let (profile, newly_unlocked) = check_achievements(profile, stats, &self.catalog);

        WorkoutCompletion {
            leveled_up: profile.level > level_before,
            profile,
            newly_unlocked,
        }
    }
}
