use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client};

use super::{Item, ProductStore};
use crate::error::FindProductError;

/// DynamoDB-backed product store. One `GetItem` per lookup, keyed on the
/// string attribute `id`; timeouts and retries are whatever the SDK client
/// is configured with.
#[derive(Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl ProductStore for DynamoStore {
    async fn find_product(&self, id: &str) -> Result<Option<Item>, FindProductError> {
        let res = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| FindProductError::Lookup(aws_sdk_dynamodb::Error::from(e).to_string()))?;

        Ok(res.item)
    }
}
