//! Core types for the Utrust merchant API
//!
//! - [`environment`] - Production/sandbox selection and base URLs
//! - [`config`] - Client configuration
//! - [`envelope`] - The `data`/`errors` JSON envelope
//! - [`order`] - Order, customer and order response payloads
//!
//! # Examples
//!
//! ```
//! use utrust_client::types::{ClientConfig, Environment};
//!
//! # fn example() -> utrust_client::Result<()> {
//! let config = ClientConfig::new("merchant-api-key", Environment::from_name("sandbox"));
//! assert_eq!(config.base_url, "https://merchants.api.sandbox-utrust.com/api/");
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod environment;
pub mod order;

// Re-export commonly used types
pub use config::{ClientConfig, MAX_REDIRECTS, REQUEST_TIMEOUT};
pub use envelope::{OrderAttributes as OrderEnvelopeAttributes, RequestEnvelope, ResourceObject};
pub use environment::{Environment, PRODUCTION_URL, SANDBOX_URL};
pub use order::{
    Amount, CustomerRequest, LineItem, OrderAttributes, OrderData, OrderRequest, ReturnUrls,
};
