use anyhow::Context;
use clap::{Parser, Subcommand};
use court_finder::config::{OutputFormat, Settings};
use court_finder::core::{current_time_string, sum_current_time, CourtMatcher};
use court_finder::models::MatchReport;
use court_finder::services::{load_people, CourtFinderClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "court-finder", version, about = "Find each person's nearest court of the right type")]
struct Cli {
    /// Explicit configuration file (otherwise config/default + config/local)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match every person in the people table with their nearest court
    Courts {
        /// People table; overrides input.people_path
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Sum the hour, minute and second of an HH:MM:SS time (defaults to now)
    SumTime {
        time: Option<String>,
    },
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(&settings);

    match cli.command {
        Command::Courts { input } => {
            let path = input.unwrap_or_else(|| settings.input.people_path.clone());
            let people = load_people(&path).with_context(|| format!("Failed to read people from {}", path))?;
            info!("Loaded {} people from {}", people.len(), path);

            let client = CourtFinderClient::new(settings.api.base_url.clone(), settings.api.timeout())
                .context("Failed to build HTTP client")?;
            let matcher = CourtMatcher::new(client);

            let matched = matcher.find_courts_for_people(people).await?;
            let report = MatchReport::new(matched);

            let rendered = match settings.output.format {
                OutputFormat::Pretty => serde_json::to_string_pretty(&report)?,
                OutputFormat::Json => serde_json::to_string(&report)?,
            };
            println!("{}", rendered);
        }
        Command::SumTime { time } => {
            let time = time.unwrap_or_else(current_time_string);
            let sum = sum_current_time(&time).with_context(|| format!("Cannot sum '{}'", time))?;
            println!("{}", sum);
        }
    }

    Ok(())
}
