//! Create an order against the Utrust API and optionally refund a payment
//!
//! ```text
//! UTRUST_API_KEY=... UTRUST_ENVIRONMENT=sandbox cargo run --example create_order
//! UTRUST_API_KEY=... cargo run --example create_order -- refund <payment-id>
//! ```

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use utrust_client::{
    Amount, CustomerRequest, Environment, GatewayClient, LineItem, OrderRequest, ReturnUrls,
    UtrustError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = env::var("UTRUST_API_KEY").map_err(|_| "UTRUST_API_KEY must be set")?;
    let environment =
        Environment::from_name(&env::var("UTRUST_ENVIRONMENT").unwrap_or_else(|_| "sandbox".into()));

    println!("Using the {} environment", environment);
    let client = GatewayClient::new(api_key, environment)?;

    let args: Vec<String> = env::args().skip(1).collect();
    if let [command, payment_id] = args.as_slice() {
        if command == "refund" {
            match client.create_refund(payment_id).await? {
                Some(data) => println!("Refund requested: {}", serde_json::to_string_pretty(&data)?),
                None => println!("Refund requested, gateway returned no data"),
            }
            return Ok(());
        }
    }

    let price = Decimal::from_str("19.90")?;
    let order = OrderRequest::new(
        format!("DEMO-{}", std::process::id()),
        Amount::new(price, "EUR"),
        ReturnUrls::new("https://shop.example/thanks")
            .with_cancel_url("https://shop.example/cart"),
    )
    .with_line_item(LineItem {
        sku: "MUG-01".to_string(),
        name: "Coffee mug".to_string(),
        price,
        currency: "EUR".to_string(),
        quantity: 1,
    });
    let customer = CustomerRequest::new("Ada", "Lovelace", "ada@example.com").with_country("GB");

    match client.create_order(&order, &customer).await {
        Ok(data) => println!("Redirect the payer to {}", data.redirect_url()),
        Err(UtrustError::Request { status, errors }) => {
            eprintln!("Gateway rejected the order ({}): {}", status, errors);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
