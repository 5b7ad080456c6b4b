// dash-client/examples/merchant_hours.rs
// Show a merchant's business hours, optionally replacing them from a JSON file

use anyhow::Context;
use dash_client::{BusinessHoursConfig, ClientConfig, ClientError, MerchantHoursClient};
use shared::hours;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dash_client=info,merchant_hours=info".into()),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <merchant_id> [config.json]", args[0]);
        println!("  Example: DASH_API_URL=http://localhost:8080 {} 42", args[0]);
        return Ok(());
    }
    let merchant_id = &args[1];

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Using backend");
    let client = MerchantHoursClient::from_config(&config)?;

    if let Some(path) = args.get(2) {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;
        let hours_config: BusinessHoursConfig =
            serde_json::from_str(&text).context("Config file is not a business hours config")?;

        match client.save(merchant_id, &hours_config).await {
            Ok(outcome) => {
                println!("{}", outcome.message.as_deref().unwrap_or("Saved"));
            }
            Err(e @ (ClientError::Rejected { .. } | ClientError::Invalid(_))) => {
                for message in e.user_messages() {
                    eprintln!("error: {}", message);
                }
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let current = client.fetch(merchant_id).await?;
    println!("{}", hours::describe_availability(&current));
    println!("{}", serde_json::to_string_pretty(&hours::encode(&current))?);

    Ok(())
}
