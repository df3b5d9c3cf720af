//! Key/value persistence trait.
//!
//! The progression tracker treats persistence as opaque string storage:
//! serialized profile JSON, stats counters, cached documents. Backends only
//! need `get`/`set`.

use async_trait::async_trait;

use crate::error::StoreError;

/// Backend-agnostic key/value store.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch the value for a key, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Durably set a key to a value, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
