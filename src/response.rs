use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use serde_json::json;

use crate::error::FindProductError;

/// Body returned when the lookup itself fails.
pub const LOOKUP_FAILED_BODY: &str = "Error occured when finding product";

// The base64 flag is set on every envelope, success or failure.
fn envelope(status_code: i64, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code,
        headers: Default::default(),
        multi_value_headers: Default::default(),
        body: Some(Body::Text(body)),
        is_base64_encoded: true,
    }
}

pub fn success(body: String) -> ApiGatewayProxyResponse {
    envelope(200, body)
}

/// Error envelope for a failed invocation. Bad requests get a structured
/// JSON body of the form `{"error": "<kind>", "message": "<details>"}`;
/// lookup failures get the fixed [`LOOKUP_FAILED_BODY`].
pub fn failure(err: &FindProductError) -> ApiGatewayProxyResponse {
    match err {
        FindProductError::BadRequest(msg) => envelope(
            400,
            json!({
                "error": "bad_request",
                "message": msg,
            })
            .to_string(),
        ),
        FindProductError::Lookup(_) => envelope(500, LOOKUP_FAILED_BODY.to_string()),
    }
}
