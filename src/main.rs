//! Storefront entry point.
//!
//! Usage: cargo run
//!        STOREFRONT_CUSTOMER_SOURCE=sample cargo run

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    masi_storefront::run().await?;
    Ok(())
}
