use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use holiday_scraper::config::Config;
use holiday_scraper::pipeline::export_holidays;

#[derive(Parser)]
#[command(name = "holidays-to-csv")]
#[command(about = "Scrape public holidays per year and write them to a CSV file", long_about = None)]
struct Cli {
    /// Path of the CSV file to write
    output: PathBuf,

    /// Years to scrape (default: every year the site has data for)
    years: Vec<i32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();
    info!("Starting holiday scrape with config: {:?}", config);

    export_holidays(&config, cli.years, &cli.output).await?;

    Ok(())
}
