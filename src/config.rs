//! Configuration types.

use crate::error::ConfigError;

/// Coaching core configuration.
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Store key under which the serialized user profile lives.
    pub profile_key: String,
    /// Experience points awarded per completed workout.
    pub xp_per_workout: u32,
    /// Coins awarded per completed workout.
    pub coins_per_workout: u32,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            profile_key: "user_profile".to_string(),
            xp_per_workout: 50,
            coins_per_workout: 10,
        }
    }
}

impl CoachConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("FIT_COACH_XP_PER_WORKOUT") {
            config.xp_per_workout = parse_env("FIT_COACH_XP_PER_WORKOUT", &value)?;
        }
        if let Ok(value) = std::env::var("FIT_COACH_COINS_PER_WORKOUT") {
            config.coins_per_workout = parse_env("FIT_COACH_COINS_PER_WORKOUT", &value)?;
        }
        Ok(config)
    }
}

fn parse_env(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("expected a non-negative integer, got '{value}'"),
    })
}
