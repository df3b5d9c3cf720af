//! Player progression — streaks, experience, coins, achievements.
//!
//! Transitions are pure functions over the profile aggregate; the tracker
//! owns persistence and serializes cycles per profile.

pub mod achievements;
pub mod engine;
pub mod profile;
pub mod tracker;

pub use achievements::{default_catalog, Achievement, ProgressStats, UnlockCondition};
pub use engine::{
    add_experience, award_coins, check_achievements, level_for_experience, update_streak,
    ProgressionConfig, ProgressionEngine, WorkoutCompletion,
};
pub use profile::UserProfile;
pub use tracker::ProgressionTracker;
