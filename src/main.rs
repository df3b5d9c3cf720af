use std::sync::Arc;

use fit_coach::config::CoachConfig;
use fit_coach::llm::{create_provider, LlmBackend, LlmConfig};
use fit_coach::plans::{GenerationConfig, PlanGenerator, UserPreferences};
use fit_coach::progression::{
    default_catalog, ProgressionConfig, ProgressionEngine, ProgressionTracker,
};
use fit_coach::store::{LibSqlStore, StateStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Read API key from environment
    let api_key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_else(|_| {
        eprintln!("Error: ANTHROPIC_API_KEY not set");
        eprintln!("  export ANTHROPIC_API_KEY=sk-ant-...");
        std::process::exit(1);
    });

    let model = std::env::var("FIT_COACH_MODEL")
        .unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string());

    let user_name = std::env::var("FIT_COACH_USER").unwrap_or_else(|_| "Athlete".to_string());

    eprintln!("🏋️ Fit Coach v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", model);

    // Create LLM provider
    let llm_config = LlmConfig {
        backend: LlmBackend::Anthropic,
        api_key: secrecy::SecretString::from(api_key),
        model,
    };
    let llm = create_provider(&llm_config)?;

    // ── Store ────────────────────────────────────────────────────────
    let db_path =
        std::env::var("FIT_COACH_DB_PATH").unwrap_or_else(|_| "./data/fit-coach.db".to_string());

    let store: Arc<dyn StateStore> = Arc::new(
        LibSqlStore::new_local(std::path::Path::new(&db_path))
            .await
            .unwrap_or_else(|e| {
                eprintln!("Error: Failed to open store at {}: {}", db_path, e);
                std::process::exit(1);
            }),
    );
    eprintln!("   Store: {}", db_path);

    // ── Progression ──────────────────────────────────────────────────
    let coach_config = CoachConfig::from_env()?;
    let progression_config = ProgressionConfig {
        xp_per_workout: coach_config.xp_per_workout,
        coins_per_workout: coach_config.coins_per_workout,
    };
    let engine = ProgressionEngine::new(progression_config, default_catalog());
    let tracker = ProgressionTracker::new(store, engine, coach_config);

    let profile = tracker.load_or_create_profile(&user_name).await?;
    eprintln!(
        "   Profile: {} (level {}, streak {} days, {} coins)",
        profile.name, profile.level, profile.current_streak, profile.coins
    );

    // ── Plan generation ──────────────────────────────────────────────
    let generator = PlanGenerator::new(llm, GenerationConfig::default());
    let preferences = UserPreferences {
        goal: std::env::var("FIT_COACH_GOAL").unwrap_or_else(|_| "general fitness".to_string()),
        experience: std::env::var("FIT_COACH_EXPERIENCE")
            .unwrap_or_else(|_| "beginner".to_string()),
        equipment: vec![],
        minutes_per_session: None,
    };

    let plans = generator.generate(&preferences, &profile, 3, None).await?;
    for plan in &plans {
        println!(
            "{} — {} (difficulty {}/5, {} exercises)",
            plan.name,
            plan.focus,
            plan.difficulty,
            plan.exercises.len()
        );
    }

    // Record today's workout against the first plan
    let today = chrono::Utc::now().date_naive();
    let completion = tracker.record_workout(&user_name, today).await?;
    println!(
        "Workout logged: streak {} days, level {}, {} coins",
        completion.profile.current_streak, completion.profile.level, completion.profile.coins
    );
    for id in &completion.newly_unlocked {
        println!("🏆 Achievement unlocked: {id}");
    }

    Ok(())
}
