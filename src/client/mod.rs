//! Gateway client for order creation and refunds
//!
//! [`GatewayClient`] wraps the two merchant API operations the crate supports:
//! creating an order (a hosted checkout the payer is redirected to) and
//! requesting a refund for a payment.
//!
//! Every call sends `Authorization: Bearer <api key>` and
//! `Content-Type: application/json`, waits at most 30 seconds, follows up to
//! 10 redirects and speaks HTTP/1.1.
//!
//! # Examples
//!
//! ```no_run
//! use utrust_client::{Environment, GatewayClient};
//! use serde_json::json;
//!
//! # async fn example() -> utrust_client::Result<()> {
//! let client = GatewayClient::new("merchant-api-key", Environment::Sandbox)?;
//!
//! let order = json!({
//!     "reference": "ORDER-1",
//!     "amount": {"total": "10.00", "currency": "EUR"},
//!     "return_urls": {"return_url": "https://shop.example/thanks"}
//! });
//! let customer = json!({"first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"});
//!
//! let data = client.create_order(&order, &customer).await?;
//! println!("Send the payer to {}", data.redirect_url());
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! - Gateway `errors` payloads become [`UtrustError::Request`]
//! - An order response without `data.attributes.redirect_url` becomes
//!   [`UtrustError::MissingField`]
//! - Bodies that are not JSON, or decode to an empty value, become
//!   [`UtrustError::MalformedResponse`]
//! - Connection failures become [`UtrustError::Transport`] or [`UtrustError::Timeout`]

use crate::types::envelope::{self, RequestEnvelope};
use crate::types::{ClientConfig, Environment, OrderData};
use crate::{Result, UtrustError};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;


/// Order creation endpoint
pub const ORDERS_ENDPOINT: &str = "stores/orders";

/// Field every order response must carry
pub const REDIRECT_URL_FIELD: &str = "data.attributes.redirect_url";

/// Characters escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the Utrust merchant API
#[derive(Clone)]
pub struct GatewayClient {
    /// Immutable configuration
    config: ClientConfig,
    /// Bearer credential, validated once at construction
    authorization: HeaderValue,
    /// HTTP client; holds the connection pool
    client: Client,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GatewayClient {
    /// Create a client for the given environment
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key, environment))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| UtrustError::config("API key contains characters not allowed in a header"))?;
        authorization.set_sensitive(true);

        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .http1_only()
            .build()
            .map_err(|e| UtrustError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            authorization,
            client,
        })
    }

    /// Get the API base URL of this client
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configuration of this client
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create an order and return the gateway's `data` object
    ///
    /// `order` and `customer` are forwarded unmodified inside
    /// `{"data": {"type": "orders", "attributes": {"order": .., "customer": ..}}}`.
    pub async fn create_order<O, C>(&self, order: &O, customer: &C) -> Result<OrderData>
    where
        O: Serialize,
        C: Serialize,
    {
        let body = serde_json::to_value(RequestEnvelope::order(order, customer))?;
        let mut response = self.request(ORDERS_ENDPOINT, Some(&body), Method::POST).await?;

        let has_redirect = response
            .pointer("/data/attributes/redirect_url")
            .and_then(Value::as_str)
            .is_some();
        if !has_redirect {
            tracing::warn!("Order response is missing {}", REDIRECT_URL_FIELD);
            return Err(UtrustError::missing_field(REDIRECT_URL_FIELD));
        }

        let data = response
            .get_mut("data")
            .map(Value::take)
            .unwrap_or_default();
        let order_data: OrderData = serde_json::from_value(data)?;
        Ok(order_data)
    }

    /// Request a refund for a payment
    ///
    /// Returns the response `data` as sent by the gateway, or `None` when the
    /// response has no `data` field.
    pub async fn create_refund(&self, payment_id: &str) -> Result<Option<Value>> {
        let endpoint = refund_endpoint(payment_id)?;
        let response = self.request(&endpoint, None, Method::GET).await?;

        let data = envelope::data_field(&response).cloned();
        if data.is_none() {
            tracing::debug!("Refund response for {} carries no data", payment_id);
        }

        Ok(data)
    }

    /// Issue a JSON request against `base_url + endpoint` and classify the response
    ///
    /// Headers, URL and body are built from scratch on every call; only the
    /// configuration and the connection pool outlive it. `GET` never carries a
    /// body, `POST` without one sends `{}`.
    pub(crate) async fn request(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        method: Method,
    ) -> Result<Value> {
        let url = self.config.endpoint_url(endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!("Sending {} request to: {}", method, url);

        let mut request = self.client.request(method.clone(), &url).headers(headers);

        if method != Method::GET {
            let empty = Value::Object(Default::default());
            let payload = serde_json::to_vec(body.unwrap_or(&empty))?;
            tracing::debug!("Request body for {}: {} bytes", endpoint, payload.len());
            request = request.body(payload);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            UtrustError::from_transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            UtrustError::from_transport(e)
        })?;

        classify_response(status, &text)
    }
}

/// Refund endpoint for a payment, with the id escaped as one path segment
///
/// Empty ids and the dot segments `.`/`..` are rejected: URL normalization
/// would drop them and the request would reach a different endpoint.
pub fn refund_endpoint(payment_id: &str) -> Result<String> {
    if matches!(payment_id, "" | "." | "..") {
        return Err(UtrustError::config(format!(
            "Invalid payment id '{}'",
            payment_id
        )));
    }

    Ok(format!(
        "payment/{}/refund",
        utf8_percent_encode(payment_id, PATH_SEGMENT)
    ))
}

/// Turn a received response into the decoded payload or a typed error
///
/// An `errors` payload wins over the status code; a non-2xx response without
/// one is reported with its raw body.
fn classify_response(status: StatusCode, body: &str) -> Result<Value> {
    let parsed = envelope::parse_body(body);

    match parsed {
        Ok(value) => {
            if let Some(errors) = envelope::errors_field(&value) {
                tracing::warn!(
                    "Gateway returned errors with status {}: {}",
                    status,
                    crate::error::render_errors(errors)
                );
                return Err(UtrustError::Request {
                    status: status.as_u16(),
                    errors: errors.clone(),
                });
            }

            if !status.is_success() {
                tracing::error!("Gateway returned status {}: {}", status, body);
                return Err(UtrustError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: body.to_string(),
                });
            }

            Ok(value)
        }
        Err(_) if !status.is_success() => {
            tracing::error!("Gateway returned status {}: {}", status, body);
            Err(UtrustError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Unable to parse gateway response: {}", e);
            Err(e)
        }
    }
}
