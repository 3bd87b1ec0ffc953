//! # Utrust merchant API client
//!
//! A small, **type-safe** Rust client for the Utrust merchant API.
//!
//! ## Features
//!
//! - 🛒 **Order creation**: Create a hosted checkout and get the URL to redirect the payer to
//! - 💸 **Refunds**: Request a refund for a payment
//! - 🔒 **Type safety**: Every failure is a typed [`UtrustError`] variant, not a message to parse
//! - 🧪 **Sandbox support**: Switch between production and sandbox with [`Environment`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//! use utrust_client::{
//!     Amount, CustomerRequest, Environment, GatewayClient, OrderRequest, ReturnUrls,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GatewayClient::new("merchant-api-key", Environment::Sandbox)?;
//!
//!     let order = OrderRequest::new(
//!         "ORDER-1",
//!         Amount::new(Decimal::from_str("10.00")?, "EUR"),
//!         ReturnUrls::new("https://shop.example/thanks"),
//!     );
//!     let customer = CustomerRequest::new("Ada", "Lovelace", "ada@example.com");
//!
//!     let data = client.create_order(&order, &customer).await?;
//!     println!("Redirect the payer to {}", data.redirect_url());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Environments, configuration, envelopes and payloads
//! - **`client`**: The [`GatewayClient`] and its two operations
//! - **`error`**: Error taxonomy

pub mod client;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::GatewayClient;
pub use error::{Result, UtrustError};
pub use types::*;

/// Current version of the client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_environment_reexports() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://merchants.api.utrust.com/api/"
        );
        assert_eq!(
            Environment::from_name("sandbox").base_url(),
            "https://merchants.api.sandbox-utrust.com/api/"
        );
    }
}
