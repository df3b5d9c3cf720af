//! Error types for the coaching core.

use std::time::Duration;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// State-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open store: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// LLM provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited, retry after {retry_after:?}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// No stage of the extraction cascade produced a parseable document.
///
/// Carries the original raw text so callers can log it for diagnostics.
/// Extraction never substitutes defaulted data for a failed parse.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no parseable document in agent response ({} bytes)", .raw.len())]
    NoDocument { raw: String },
}

impl ExtractionError {
    /// The original raw response text.
    pub fn raw(&self) -> &str {
        match self {
            Self::NoDocument { raw } => raw,
        }
    }
}

/// Batch generation errors.
///
/// A chunk failure aborts the whole batch — `generate` never returns
/// partial results across the caller boundary.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("requested batch size must be at least 1 (got {0})")]
    InvalidCount(usize),

    #[error("chunk {index} generation call failed: {source}")]
    Chunk {
        index: usize,
        #[source]
        source: LlmError,
    },

    #[error("chunk {index} extraction failed: {source}")]
    ChunkExtraction {
        index: usize,
        #[source]
        source: ExtractionError,
    },

    #[error("chunk {index} document did not match the workouts schema: {reason}")]
    ChunkSchema { index: usize, reason: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
