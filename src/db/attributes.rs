use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Map, Value};

use super::Item;

/// Encode a lookup result the way the store's `GetItem` call reports it on
/// the wire: `{"Item": {...}}` when a record was returned, `{}` when not.
pub fn lookup_response_json(item: Option<&Item>) -> Value {
    match item {
        Some(item) => json!({ "Item": item_to_json(item) }),
        None => json!({}),
    }
}

fn item_to_json(item: &Item) -> Value {
    let mut map = Map::new();
    for (name, value) in item {
        map.insert(name.clone(), attribute_to_json(value));
    }

    Value::Object(map)
}

/// Encode a single attribute value as its type-tagged wire representation,
/// e.g. `{"S": "Widget"}`. Binary values are base64-encoded.
fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => json!({ "S": s }),
        AttributeValue::N(n) => json!({ "N": n }),
        AttributeValue::Bool(b) => json!({ "BOOL": b }),
        AttributeValue::Null(is_null) => json!({ "NULL": is_null }),
        AttributeValue::B(blob) => {
            json!({ "B": general_purpose::STANDARD.encode(blob.as_ref()) })
        }
        AttributeValue::Ss(values) => json!({ "SS": values }),
        AttributeValue::Ns(values) => json!({ "NS": values }),
        AttributeValue::Bs(blobs) => json!({
            "BS": blobs
                .iter()
                .map(|b| general_purpose::STANDARD.encode(b.as_ref()))
                .collect::<Vec<_>>()
        }),
        AttributeValue::L(values) => {
            json!({ "L": values.iter().map(attribute_to_json).collect::<Vec<_>>() })
        }
        AttributeValue::M(entries) => {
            let mut map = Map::new();
            for (name, value) in entries {
                map.insert(name.clone(), attribute_to_json(value));
            }
            json!({ "M": map })
        }
        other => {
            tracing::warn!(?other, "unsupported attribute type, encoding as null");
            Value::Null
        }
    }
}
