use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{Item, ProductStore};
use crate::error::FindProductError;

/// In-memory product store for local development and testing.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: String, item: Item) -> Result<(), FindProductError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| FindProductError::Lookup(format!("lock error: {e}")))?;
        items.insert(id, item);

        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_product(&self, id: &str) -> Result<Option<Item>, FindProductError> {
        let items = self
            .items
            .read()
            .map_err(|e| FindProductError::Lookup(format!("lock error: {e}")))?;

        Ok(items.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::AttributeValue;

    use super::*;

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryStore::new();
        let mut item = Item::new();
        item.insert("id".to_string(), AttributeValue::S("42".to_string()));
        store.insert("42".to_string(), item).unwrap();

        let found = store.find_product("42").await.unwrap();
        assert_eq!(
            found.unwrap().get("id"),
            Some(&AttributeValue::S("42".to_string()))
        );
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.find_product("nope").await.unwrap().is_none());
    }
}
