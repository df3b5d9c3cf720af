//! Fit Coach — fitness coaching agent core.
//!
//! Extracts schema-conforming structured data from an unreliable free-text
//! agent, generates batches of uniquely-named workout plans, and runs the
//! player-progression state machine over a persisted user profile.

pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod plans;
pub mod progression;
pub mod store;
