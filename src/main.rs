use std::env;

use find_product::config::Config;
use find_product::db::dynamo::DynamoStore;
use find_product::db::memory::MemoryStore;
use find_product::db::ProductStore;
use find_product::handler::function_handler;
use lambda_runtime::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let store: Box<dyn ProductStore> = match env::var("PRODUCT_STORE_BACKEND").as_deref() {
        Ok("memory") => {
            tracing::info!("using in-memory product store");
            Box::new(MemoryStore::new())
        }
        _ => {
            tracing::info!("using DynamoDB product store");
            let config = Config::from_env()?;
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            Box::new(DynamoStore::new(client, config.table_name))
        }
    };

    run(service_fn(|event| function_handler(store.as_ref(), event))).await
}
