mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ranker_lib::ranker_api::Client;
use ranker_lib::Session;

use crate::output::OutputFormat;

/// Fallback job description for AI assessments when neither the flag nor
/// the environment provides one.
const DEFAULT_JOB_DESCRIPTION: &str =
    "Senior software engineer, full-stack, with production experience.";

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Filter, rank, and export candidates from the scoring service")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the sample candidates and show the current view
    List(commands::list::ListArgs),
    /// Rank candidates with configurable criterion weights
    Rank(commands::rank::RankArgs),
    /// Request an AI assessment for one candidate
    Assess(commands::assess::AssessArgs),
    /// Export the filtered candidate set as CSV
    Export(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ranker=info".parse().unwrap()),
        )
        .with_target(false)
        .init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    // The service address is resolved exactly once, here, and handed to
    // the client explicitly.
    let base_url =
        std::env::var("RANKER_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let job_description = std::env::var("RANKER_JOB_DESCRIPTION")
        .unwrap_or_else(|_| DEFAULT_JOB_DESCRIPTION.to_string());

    let client = Client::with_base_url(&base_url);
    let mut session = Session::new(client, job_description);

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &mut session, &format).await?,
        Commands::Rank(args) => commands::rank::run(args, &mut session, &format).await?,
        Commands::Assess(args) => commands::assess::run(args, &mut session).await?,
        Commands::Export(args) => commands::export::run(args, &mut session).await?,
    }

    Ok(())
}
