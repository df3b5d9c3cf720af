//! Batch plan generator — chunked generation with client-side dedup.
//!
//! Large batches are split into at most `MAX_CHUNKS` chunks so each remote
//! response stays small enough to avoid truncation (the extraction cascade
//! handles the stragglers). The agent is not guaranteed to avoid repeats
//! across independent calls, so names are deduplicated here with a set that
//! spans the whole batch.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::GenerationError;
use crate::extract::{self, RawAgentResponse};
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::plans::model::{PlanCandidate, UserPreferences, WorkoutPlan};
use crate::plans::prompts;
use crate::progression::UserProfile;

/// Upper bound on generation calls per batch.
const MAX_CHUNKS: usize = 3;

/// Configuration for plan generation.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// LLM temperature — some variety is wanted between chunks.
    pub temperature: f32,
    /// Max tokens per chunk response.
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

/// Shape of one chunk's extracted document.
#[derive(Debug, Deserialize)]
struct ChunkDocument {
    #[serde(default)]
    workouts: Vec<PlanCandidate>,
}

/// Generates batches of uniquely-named workout plans from the remote agent.
pub struct PlanGenerator {
    llm: Arc<dyn LlmProvider>,
    config: GenerationConfig,
}

impl PlanGenerator {
    pub fn new(llm: Arc<dyn LlmProvider>, config: GenerationConfig) -> Self {
        Self { llm, config }
    }

    /// Generate up to `count` plans with pairwise-distinct names.
    ///
    /// A failed chunk (remote call or extraction) fails the whole batch —
    /// callers retry the entire operation, never consume partial results.
    pub async fn generate(
        &self,
        preferences: &UserPreferences,
        profile: &UserProfile,
        count: usize,
        focus_hint: Option<&str>,
    ) -> Result<Vec<WorkoutPlan>, GenerationError> {
        if count == 0 {
            return Err(GenerationError::InvalidCount(0));
        }

        let chunk_size = count.div_ceil(MAX_CHUNKS);
        let mut plans: Vec<WorkoutPlan> = Vec::with_capacity(count);
        let mut seen_names: HashSet<String> = HashSet::with_capacity(count);

        let mut index = 0;
        while plans.len() < count && index < MAX_CHUNKS {
            let remaining = count - plans.len();
            let request_size = chunk_size.min(remaining);

            info!(
                chunk = index,
                size = request_size,
                collected = plans.len(),
                "Requesting plan chunk"
            );

            let candidates = self
                .generate_chunk(preferences, profile, request_size, focus_hint, index)
                .await?;

            for candidate in candidates {
                if plans.len() >= count {
                    break;
                }
                // Case-sensitive exact match; duplicates across chunks are
                // dropped silently, first occurrence wins.
                if !seen_names.insert(candidate.name.clone()) {
                    debug!(name = %candidate.name, "Discarding duplicate plan name");
                    continue;
                }
                plans.push(candidate.into_plan());
            }

            index += 1;
        }

        info!(
            requested = count,
            produced = plans.len(),
            chunks = index,
            "Batch generation complete"
        );
        Ok(plans)
    }

    /// Issue one chunk's remote call and extract its candidates.
    ///
    /// Each call carries the same context but fresh generation — there is no
    /// cross-chunk conversation memory of prior chunk names.
    async fn generate_chunk(
        &self,
        preferences: &UserPreferences,
        profile: &UserProfile,
        chunk_size: usize,
        focus_hint: Option<&str>,
        index: usize,
    ) -> Result<Vec<PlanCandidate>, GenerationError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::build_system_prompt(chunk_size)),
            ChatMessage::user(prompts::build_user_prompt(preferences, profile, focus_hint)),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        let response = self
            .llm
            .complete(request)
            .await
            .map_err(|source| GenerationError::Chunk { index, source })?;

        let document = extract::extract(&RawAgentResponse::text(response.content))
            .map_err(|source| GenerationError::ChunkExtraction { index, source })?;

        let chunk: ChunkDocument = serde_json::from_value(serde_json::Value::Object(document))
            .map_err(|e| GenerationError::ChunkSchema {
                index,
                reason: e.to_string(),
            })?;

        debug!(
            chunk = index,
            candidates = chunk.workouts.len(),
            "Chunk extracted"
        );
        Ok(chunk.workouts)
    }
}
