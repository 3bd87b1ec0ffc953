//! Order and customer payloads
//!
//! The gateway accepts any JSON for the order and customer objects and the
//! client forwards them untouched. These structs are a typed convenience for
//! the common fields; `serde_json::Value` works just as well.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Order to be paid through the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Merchant-side order reference
    pub reference: String,
    /// Total amount to be charged
    pub amount: Amount,
    /// Where the payer is sent after the checkout
    pub return_urls: ReturnUrls,
    /// Purchased items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,
}

impl OrderRequest {
    /// Create a new order
    pub fn new(reference: impl Into<String>, amount: Amount, return_urls: ReturnUrls) -> Self {
        Self {
            reference: reference.into(),
            amount,
            return_urls,
            line_items: Vec::new(),
        }
    }

    /// Add a line item
    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }
}

/// Monetary amount; `total` is serialized as a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub total: Decimal,
    pub currency: String,
}

impl Amount {
    pub fn new(total: Decimal, currency: impl Into<String>) -> Self {
        Self {
            total,
            currency: currency.into(),
        }
    }
}

/// Redirect targets for the payer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnUrls {
    /// Destination after a completed payment
    pub return_url: String,
    /// Destination after a cancelled payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    /// Endpoint receiving payment status callbacks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl ReturnUrls {
    pub fn new(return_url: impl Into<String>) -> Self {
        Self {
            return_url: return_url.into(),
            cancel_url: None,
            callback_url: None,
        }
    }

    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

/// Single purchased item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    pub currency: String,
    pub quantity: u32,
}

/// Payer details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl CustomerRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// The `data` object returned by order creation
///
/// Only `attributes.redirect_url` is typed; `id` and `type` are kept as the
/// gateway sent them and unknown fields land in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    pub attributes: OrderAttributes,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderData {
    /// Gateway page the payer must be redirected to
    pub fn redirect_url(&self) -> &str {
        &self.attributes.redirect_url
    }
}

/// Attributes of a created order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAttributes {
    pub redirect_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
