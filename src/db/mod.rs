pub mod attributes;
pub mod dynamo;
pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::FindProductError;

/// A raw product record exactly as stored: attribute name to attribute-typed
/// value. No schema is validated or transformed at this layer.
pub type Item = HashMap<String, AttributeValue>;

/// Storage backend abstraction for product lookups.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Point lookup by primary key. `Ok(None)` means the call succeeded but
    /// no record exists under `id`.
    async fn find_product(&self, id: &str) -> Result<Option<Item>, FindProductError>;
}
