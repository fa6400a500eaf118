use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use neofeed::analysis::{parse_neo_json, render_report};
use neofeed::client::NeoApiClient;
use neofeed::config::NeoConfig;
use neofeed::feed::FeedUpdater;
use neofeed::logging;

#[derive(Parser)]
#[command(
    name = "neofeed",
    version,
    about = "NASA near-Earth-object feed summaries and assessment reports"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a one-line-per-object summary of the NEO feed for a date window
    Feed {
        /// Window start date (YYYY-MM-DD), passed to the API as-is
        #[arg(long)]
        start: String,

        /// Window end date (YYYY-MM-DD), passed to the API as-is
        #[arg(long)]
        end: String,
    },
    /// Print a full assessment report for one NEO reference ID
    Analyze {
        /// NASA NEO reference ID, e.g. 2099942 (Apophis)
        reference_id: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match NeoConfig::load(&cli.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error:#}");
            std::process::exit(1);
        }
    };
    let _logging_guard = logging::init_logging("logs", "neofeed", &config.log_level);

    // Either the full formatted text or one error line, never a mix.
    match run(cli.command, &config).await {
        Ok(text) => print!("{text}"),
        Err(error) => {
            tracing::error!("{error:#}");
            println!("Error: {error:#}");
            std::process::exit(1);
        }
    }
}

async fn run(command: Command, config: &NeoConfig) -> Result<String> {
    let client = NeoApiClient::new(config)?;
    match command {
        Command::Feed { start, end } => {
            let updater = Arc::new(FeedUpdater::new(client));
            // One single-shot background task; awaiting delivers the
            // result exactly once, dropping it would abort the fetch.
            updater.spawn(start, end).into_result().await
        }
        Command::Analyze { reference_id } => {
            let body = client.fetch_neo(&reference_id).await?;
            let detail = parse_neo_json(&body)?;
            Ok(render_report(&detail, chrono::Utc::now()))
        }
    }
}
