//! Prompt construction for plan generation.
//!
//! The system prompt embeds the exact JSON schema we expect back. This is a
//! soft contract — the agent is not guaranteed to honor it, which is why the
//! extraction cascade exists.

use crate::plans::model::UserPreferences;
use crate::progression::UserProfile;

/// Build the generation system prompt, including the example schema.
pub fn build_system_prompt(chunk_size: usize) -> String {
    format!(
        "You are a fitness coach generating workout plans. Produce exactly {chunk_size} \
         distinct workout plans as JSON.\n\n\
         Respond with ONLY a JSON object of this shape:\n\
         {{\"workouts\": [{{\"name\": \"Full Body Blast\", \"difficulty\": 3, \"focus\": \"Full Body\", \
         \"exercises\": [{{\"name\": \"Goblet Squat\", \"sets\": 4, \"reps\": \"8-12\", \
         \"rest\": \"90s\", \"note\": \"pause at the bottom\"}}]}}]}}\n\n\
         Rules:\n\
         - \"difficulty\" is an integer from 1 (easiest) to 5 (hardest)\n\
         - \"reps\" is a count or range as a string\n\
         - \"rest\" is a duration as a string\n\
         - \"note\" is optional\n\
         - Every plan name must be unique and descriptive\n\
         - No markdown, no commentary, no text outside the JSON object"
    )
}

/// Build the generation user prompt from preferences and profile context.
pub fn build_user_prompt(
    preferences: &UserPreferences,
    profile: &UserProfile,
    focus_hint: Option<&str>,
) -> String {
    let mut prompt = String::with_capacity(256);

    prompt.push_str(&format!(
        "Goal: {}\nExperience: {}\n",
        preferences.goal, preferences.experience
    ));

    if !preferences.equipment.is_empty() {
        prompt.push_str(&format!(
            "Equipment: {}\n",
            preferences.equipment.join(", ")
        ));
    }
    if let Some(minutes) = preferences.minutes_per_session {
        prompt.push_str(&format!("Session length: {minutes} minutes\n"));
    }

    if let Some(focus) = focus_hint {
        prompt.push_str(&format!("Focus area: {focus}\n"));
    }

    // Profile context helps the agent pitch difficulty appropriately.
    prompt.push_str(&format!(
        "User level: {} (current streak {} days)\n",
        profile.level, profile.current_streak
    ));
    if profile.age > 0 {
        prompt.push_str(&format!("Age: {}\n", profile.age));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> UserPreferences {
        UserPreferences {
            goal: "build muscle".into(),
            experience: "intermediate".into(),
            equipment: vec!["dumbbells".into(), "bench".into()],
            minutes_per_session: Some(45),
        }
    }

    #[test]
    fn system_prompt_carries_example_schema() {
        let prompt = build_system_prompt(2);
        assert!(prompt.contains("\"workouts\""));
        assert!(prompt.contains("\"exercises\""));
        assert!(prompt.contains("\"difficulty\""));
        assert!(prompt.contains("exactly 2"));
    }

    #[test]
    fn user_prompt_includes_preferences_and_hint() {
        let profile = UserProfile::new("Sam");
        let prompt = build_user_prompt(&prefs(), &profile, Some("upper body"));
        assert!(prompt.contains("build muscle"));
        assert!(prompt.contains("dumbbells, bench"));
        assert!(prompt.contains("45 minutes"));
        assert!(prompt.contains("Focus area: upper body"));
    }

    #[test]
    fn user_prompt_omits_absent_hint() {
        let profile = UserProfile::new("Sam");
        let prompt = build_user_prompt(&prefs(), &profile, None);
        assert!(!prompt.contains("Focus area"));
    }
}
