//! The `assess` subcommand: request a secondary AI assessment for one
//! candidate.

use anyhow::{bail, Context, Result};
use clap::Args;
use ranker_lib::{DetailState, Session};

#[derive(Args)]
pub struct AssessArgs {
    /// Candidate identifier (as shown in the list output)
    #[arg(long, conflicts_with = "name")]
    pub id: Option<String>,

    /// Candidate name (case-insensitive substring match)
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn run(args: &AssessArgs, session: &mut Session) -> Result<()> {
    session.load_sample().await.with_context(|| {
        session
            .error_banner()
            .unwrap_or("request failed")
            .to_string()
    })?;

    let id = resolve_id(args, session)?;
    let candidate = session
        .find_candidate(&id)
        .cloned()
        .with_context(|| format!("no candidate with id '{}'", id))?;

    println!(
        "{} <{}>  score {:.3}",
        candidate.display_name(),
        candidate.email(),
        candidate.score()
    );

    match session.assess(&id).await? {
        DetailState::Succeeded(assessment) => {
            println!("AI score: {}", assessment.score);
            println!("Summary:  {}", assessment.summary);
        }
        DetailState::Failed(message) => {
            // Scoped to this candidate's panel; not a list-level failure.
            eprintln!("AI assessment unavailable: {}", message);
        }
        state => bail!("unexpected assessment state: {:?}", state),
    }
    Ok(())
}

fn resolve_id(args: &AssessArgs, session: &Session) -> Result<String> {
    if let Some(id) = &args.id {
        return Ok(id.clone());
    }
    let Some(name) = &args.name else {
        bail!("pass either --id or --name");
    };
    let needle = name.to_lowercase();
    let matches: Vec<_> = session
        .candidates()
        .iter()
        .filter(|c| c.display_name().to_lowercase().contains(&needle))
        .collect();
    match matches.as_slice() {
        [] => bail!("no candidate matches name '{}'", name),
        [only] => Ok(only.id.clone().unwrap_or_default()),
        many => bail!(
            "name '{}' is ambiguous: matches {} candidates",
            name,
            many.len()
        ),
    }
}
