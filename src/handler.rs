use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{Error, LambdaEvent};
use tracing::{debug, error, info};

use crate::db::attributes::lookup_response_json;
use crate::db::ProductStore;
use crate::error::FindProductError;
use crate::response;

/// Lambda handler for the find-product API route.
///
/// Issues exactly one lookup per invocation and always returns a well-formed
/// envelope: 200 with the raw store response on a successful call (found or
/// not), 400 when the `id` path parameter is absent, 500 when the lookup
/// fails. The id itself is passed through unchecked.
pub async fn function_handler(
    store: &dyn ProductStore,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let Some(product_id) = event.payload.path_parameters.get("id") else {
        let err = FindProductError::BadRequest("missing path parameter `id`".to_string());
        error!(%err, "rejecting request");
        return Ok(response::failure(&err));
    };

    debug!(%product_id, "extracted product id");

    info!("finding product");
    match store.find_product(product_id).await {
        Ok(item) => {
            let body = lookup_response_json(item.as_ref()).to_string();
            info!(response = %body, "lookup succeeded");
            Ok(response::success(body))
        }
        Err(err) => {
            error!(%err, "lookup failed");
            Ok(response::failure(&err))
        }
    }
}
