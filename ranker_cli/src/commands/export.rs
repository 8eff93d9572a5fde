//! The `export` subcommand: write the filtered candidate set to a CSV
//! file. The encoder stays pure; this command is the download side
//! effect.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ranker_lib::Session;

use super::FilterArgs;

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    #[arg(long, default_value = "candidates.csv")]
    pub path: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &ExportArgs, session: &mut Session) -> Result<()> {
    session.load_sample().await.with_context(|| {
        session
            .error_banner()
            .unwrap_or("request failed")
            .to_string()
    })?;
    args.filters.apply(session)?;

    let encoded = session.export_csv();
    let count = session.visible().total;
    std::fs::write(&args.path, &encoded)
        .with_context(|| format!("failed to write {}", args.path.display()))?;

    println!("Wrote {} candidates to {}", count, args.path.display());
    Ok(())
}
