use betting_ng::models::MarketFilter;
use betting_ng::{Config, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load("config.toml")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.general.log_level)),
        )
        .init();

    let session = Session::from_config(&cfg)?;

    println!("Fetching event types...");
    let event_types = session.list_event_types(None).await?;
    for result in &event_types {
        if let Some(event_type) = &result.event_type {
            println!(
                "{:>8}  {:<30} {} markets",
                event_type.id, event_type.name, result.market_count
            );
        }
    }

    // Countries with open soccer markets
    let soccer = MarketFilter::new().with_event_type_ids(["1"]);
    let countries = session.list_countries(Some(soccer)).await?;
    println!("\nSoccer markets in {} countries", countries.len());

    Ok(())
}
