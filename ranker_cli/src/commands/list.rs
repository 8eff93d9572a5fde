//! The `list` subcommand: load sample candidates and show the current view.

use anyhow::{Context, Result};
use clap::Args;
use ranker_lib::Session;

use crate::output::{print_view, OutputFormat};

use super::FilterArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &ListArgs, session: &mut Session, format: &OutputFormat) -> Result<()> {
    session
        .load_sample()
        .await
        .with_context(|| banner(session))?;

    args.filters.apply(session)?;
    print_view(session, format);
    Ok(())
}

fn banner(session: &Session) -> String {
    session
        .error_banner()
        .unwrap_or("request failed")
        .to_string()
}
