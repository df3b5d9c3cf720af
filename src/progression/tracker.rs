//! Progression tracker — the single serialization point for profile state.
//!
//! The engine's transitions are pure; this service owns the read-modify-write
//! cycle against the store. A per-tracker mutex serializes cycles so two
//! near-simultaneous completions on the same profile cannot interleave and
//! lose updates.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::CoachConfig;
use crate::error::{Error, StoreError};
use crate::progression::achievements::ProgressStats;
use crate::progression::engine::{ProgressionEngine, WorkoutCompletion};
use crate::progression::profile::UserProfile;
use crate::store::StateStore;

/// Store key for the workout-count stats, alongside the profile key.
const STATS_KEY: &str = "progress_stats";

/// Applies progression transitions to the persisted profile.
pub struct ProgressionTracker {
    store: Arc<dyn StateStore>,
    engine: ProgressionEngine,
    config: CoachConfig,
    /// Serializes read-modify-write cycles per tracker (one tracker per profile).
    cycle: Mutex<()>,
}

impl ProgressionTracker {
    pub fn new(store: Arc<dyn StateStore>, engine: ProgressionEngine, config: CoachConfig) -> Self {
        Self {
            store,
            engine,
            config,
            cycle: Mutex::new(()),
        }
    }

    /// Load the profile, creating and persisting a zero-valued one on first
    /// launch.
    pub async fn load_or_create_profile(&self, name: &str) -> Result<UserProfile, Error> {
        match self.store.get(&self.config.profile_key).await? {
            Some(json) => {
                let profile: UserProfile =
                    serde_json::from_str(&json).map_err(StoreError::Serialization)?;
                Ok(profile)
            }
            None => {
                info!(name, "No stored profile, creating zero-valued profile");
                let profile = UserProfile::new(name);
                self.save_profile(&profile).await?;
                Ok(profile)
            }
        }
    }

    /// Record a completed workout: load, transition, save.
    ///
    /// The whole cycle holds the tracker lock, so transitions apply strictly
    /// in dispatch order and achievements are never double-awarded.
    pub async fn record_workout(
        &self,
        name: &str,
        today: NaiveDate,
    ) -> Result<WorkoutCompletion, Error> {
        let _guard = self.cycle.lock().await;

        let profile = self.load_or_create_profile(name).await?;
        let mut stats = self.load_stats().await?;
        stats.total_workouts += 1;

        let completion = self.engine.complete_workout(profile, today, &stats);

        self.save_profile(&completion.profile).await?;
        self.save_stats(&stats).await?;

        debug!(
            streak = completion.profile.current_streak,
            level = completion.profile.level,
            unlocked = completion.newly_unlocked.len(),
            "Workout recorded"
        );
        Ok(completion)
    }

    /// Read-only snapshot of the current stats.
    pub async fn stats(&self) -> Result<ProgressStats, Error> {
        self.load_stats().await
    }

    async fn load_stats(&self) -> Result<ProgressStats, Error> {
        match self.store.get(STATS_KEY).await? {
            Some(json) => {
                let stats = serde_json::from_str(&json).map_err(StoreError::Serialization)?;
                Ok(stats)
            }
            None => Ok(ProgressStats::default()),
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), Error> {
        let json = serde_json::to_string(profile).map_err(StoreError::Serialization)?;
        self.store.set(&self.config.profile_key, &json).await?;
        Ok(())
    }

    async fn save_stats(&self, stats: &ProgressStats) -> Result<(), Error> {
        let json = serde_json::to_string(stats).map_err(StoreError::Serialization)?;
        self.store.set(STATS_KEY, &json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::achievements::default_catalog;
    use crate::progression::engine::ProgressionConfig;
    use crate::store::MemoryStore;

    fn tracker(store: Arc<dyn StateStore>) -> ProgressionTracker {
        ProgressionTracker::new(
            store,
            ProgressionEngine::new(ProgressionConfig::default(), default_catalog()),
            CoachConfig::default(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn first_launch_creates_and_persists_profile() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let tracker = tracker(Arc::clone(&store));

        let profile = tracker.load_or_create_profile("Sam").await.unwrap();
        assert_eq!(profile.level, 1);
        assert!(store.get("user_profile").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn workout_persists_across_tracker_instances() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());

        let first = tracker(Arc::clone(&store));
        let completion = first.record_workout("Sam", date(2026, 8, 29)).await.unwrap();
        assert_eq!(completion.profile.current_streak, 1);
        assert_eq!(completion.newly_unlocked, vec!["first_workout".to_string()]);

        // A new tracker over the same store sees the saved state.
        let second = tracker(Arc::clone(&store));
        let completion = second
            .record_workout("Sam", date(2026, 8, 30))
            .await
            .unwrap();
        assert_eq!(completion.profile.current_streak, 2);
        assert_eq!(completion.profile.experience_points, 100);
        assert_eq!(completion.profile.level, 2);
        assert!(completion.leveled_up);
    }

    #[tokio::test]
    async fn achievements_are_not_rewarded_on_restart() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());

        let first = tracker(Arc::clone(&store));
        let completion = first.record_workout("Sam", date(2026, 8, 29)).await.unwrap();
        assert!(completion
            .newly_unlocked
            .contains(&"first_workout".to_string()));

        // Same-day repeat after a "restart": unlock must not re-fire.
        let second = tracker(Arc::clone(&store));
        let completion = second
            .record_workout("Sam", date(2026, 8, 29))
            .await
            .unwrap();
        assert!(completion.newly_unlocked.is_empty());
    }

    #[tokio::test]
    async fn stats_count_every_completion() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let tracker = tracker(store);

        tracker.record_workout("Sam", date(2026, 8, 29)).await.unwrap();
        tracker.record_workout("Sam", date(2026, 8, 29)).await.unwrap();
        assert_eq!(tracker.stats().await.unwrap().total_workouts, 2);
    }
}
