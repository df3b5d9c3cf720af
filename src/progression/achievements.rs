//! Achievement catalog — immutable configuration, not engine state.

use serde::{Deserialize, Serialize};

use crate::progression::profile::UserProfile;

/// Action-level stats the profile doesn't carry itself (tracked by the
/// caller, e.g. from the workout log).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_workouts: u32,
}

/// Condition under which an achievement unlocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockCondition {
    TotalWorkouts(u32),
    StreakDays(u32),
    LevelReached(u32),
    CoinsEarned(u32),
}

impl UnlockCondition {
    /// Evaluate against the current (post-transition) profile and stats.
    pub fn is_met(&self, profile: &UserProfile, stats: &ProgressStats) -> bool {
        match *self {
            Self::TotalWorkouts(n) => stats.total_workouts >= n,
            Self::StreakDays(n) => profile.current_streak >= n,
            Self::LevelReached(n) => profile.level >= n,
            Self::CoinsEarned(n) => profile.coins >= n,
        }
    }
}

/// A static catalog entry.
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: UnlockCondition,
}

/// The built-in achievement catalog.
pub fn default_catalog() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "first_workout",
            name: "First Steps",
            description: "Complete your first workout",
            condition: UnlockCondition::TotalWorkouts(1),
        },
        Achievement {
            id: "ten_workouts",
            name: "Getting Serious",
            description: "Complete 10 workouts",
            condition: UnlockCondition::TotalWorkouts(10),
        },
        Achievement {
            id: "centurion",
            name: "Centurion",
            description: "Complete 100 workouts",
            condition: UnlockCondition::TotalWorkouts(100),
        },
        Achievement {
            id: "week_warrior",
            name: "Week Warrior",
            description: "Train 7 days in a row",
            condition: UnlockCondition::StreakDays(7),
        },
        Achievement {
            id: "month_master",
            name: "Month Master",
            description: "Train 30 days in a row",
            condition: UnlockCondition::StreakDays(30),
        },
        Achievement {
            id: "level_five",
            name: "Rising Star",
            description: "Reach level 5",
            condition: UnlockCondition::LevelReached(5),
        },
        Achievement {
            id: "level_ten",
            name: "Elite Athlete",
            description: "Reach level 10",
            condition: UnlockCondition::LevelReached(10),
        },
        Achievement {
            id: "coin_collector",
            name: "Coin Collector",
            description: "Earn 500 coins",
            condition: UnlockCondition::CoinsEarned(500),
        },
    ]
}
