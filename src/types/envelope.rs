//! JSON envelopes exchanged with the gateway
//!
//! Every request and response is wrapped in an outer object: `{"data": {...}}`
//! on success, `{"errors": ...}` on failure.

use serde::Serialize;
use serde_json::Value;

/// Resource type of an order envelope
pub const ORDERS_TYPE: &str = "orders";

/// Outgoing request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope<A> {
    pub data: ResourceObject<A>,
}

/// Typed resource inside an envelope
#[derive(Debug, Clone, Serialize)]
pub struct ResourceObject<A> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: A,
}

/// Attributes of an order creation request
#[derive(Debug, Clone, Serialize)]
pub struct OrderAttributes<'a, O, C> {
    pub order: &'a O,
    pub customer: &'a C,
}

impl<'a, O: Serialize, C: Serialize> RequestEnvelope<OrderAttributes<'a, O, C>> {
    /// Wrap order and customer payloads without touching their contents
    pub fn order(order: &'a O, customer: &'a C) -> Self {
        Self {
            data: ResourceObject {
                kind: ORDERS_TYPE,
                attributes: OrderAttributes { order, customer },
            },
        }
    }
}

/// Parse a response body into a non-empty JSON value
pub fn parse_body(body: &str) -> crate::Result<Value> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| crate::UtrustError::malformed(format!("{} ({:?})", e, e.classify())))?;

    if is_empty_json(&value) {
        return Err(crate::UtrustError::malformed("response decoded to an empty value"));
    }

    Ok(value)
}

/// Whether a decoded value carries nothing: null, false, zero, or an empty string or array
///
/// Objects are never empty; `{}` is a valid envelope without `data`.
pub fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

/// The `errors` field of a response, ignoring an explicit `null`
pub fn errors_field(response: &Value) -> Option<&Value> {
    response.get("errors").filter(|errors| !errors.is_null())
}

/// The `data` field of a response, ignoring an explicit `null`
pub fn data_field(response: &Value) -> Option<&Value> {
    response.get("data").filter(|data| !data.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_envelope_shape() {
        let order = json!({"reference": "ORDER-1", "amount": {"total": "10.00", "currency": "EUR"}});
        let customer = json!({"email": "payer@example.com"});

        let envelope = RequestEnvelope::order(&order, &customer);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "data": {
                    "type": "orders",
                    "attributes": {"order": order, "customer": customer}
                }
            })
        );
    }

    #[test]
    fn test_parse_body_rejects_garbage_and_empty_values() {
        assert!(parse_body("<html>502 Bad Gateway</html>").is_err());
        assert!(parse_body("").is_err());
        assert!(parse_body("null").is_err());
        assert!(parse_body("[]").is_err());
        assert!(parse_body("false").is_err());
        assert!(parse_body("0").is_err());

        assert_eq!(parse_body("{}").unwrap(), json!({}));

        let value = parse_body(r#"{"data": {"type": "orders"}}"#).unwrap();
        assert_eq!(value["data"]["type"], "orders");
    }

    #[test]
    fn test_errors_and_data_fields() {
        let response = json!({"errors": ["bad request"]});
        assert_eq!(errors_field(&response), Some(&json!(["bad request"])));
        assert!(data_field(&response).is_none());

        let response = json!({"errors": null, "data": {"type": "refunds"}});
        assert!(errors_field(&response).is_none());
        assert_eq!(data_field(&response), Some(&json!({"type": "refunds"})));

        assert!(errors_field(&json!(["not", "an", "object"])).is_none());
    }
}
