// Debug utility: probe the local registry readiness endpoint

use anyhow::Result;

use regfix::models::registry::DEFAULT_REGISTRY_URL;
use regfix::services::registry_manager::registry_is_up;

#[tokio::main]
async fn main() -> Result<()> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

    let client = reqwest::Client::new();
    if registry_is_up(&client, &url).await {
        println!("✓ registry at {} is answering", url);
    } else {
        println!("✗ registry at {} is not answering", url);
        std::process::exit(1);
    }

    Ok(())
}
