//! In-memory store backend for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::traits::StateStore;

/// HashMap-backed store. Contents vanish with the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());

        store.set("user_profile", r#"{"name":"Sam"}"#).await.unwrap();
        assert_eq!(
            store.get("user_profile").await.unwrap().as_deref(),
            Some(r#"{"name":"Sam"}"#)
        );

        store.set("user_profile", "updated").await.unwrap();
        assert_eq!(
            store.get("user_profile").await.unwrap().as_deref(),
            Some("updated")
        );
    }
}
