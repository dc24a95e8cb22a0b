use std::env;

use lambda_runtime::Error;

const TABLE_NAME_VAR: &str = "DYNAMODB_TABLE";

/// Process configuration, read once at startup and passed into the store
/// rather than consulted from globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the DynamoDB product table.
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let table_name =
            env::var(TABLE_NAME_VAR).map_err(|_| Error::from(format!("{TABLE_NAME_VAR} not set")))?;

        Ok(Self { table_name })
    }
}
