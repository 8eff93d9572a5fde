//! CLI subcommand implementations.

pub mod assess;
pub mod export;
pub mod list;
pub mod rank;

use anyhow::{bail, Result};
use clap::Args;
use ranker_lib::{Session, SortKey};

/// Filter, sort, and paging flags shared by the view-producing
/// subcommands.
#[derive(Args)]
pub struct FilterArgs {
    /// Free-text search over name, email, and notes (case-insensitive)
    #[arg(long)]
    pub query: Option<String>,

    /// Required skills, comma-separated; candidates must have all of them
    #[arg(long)]
    pub skills: Option<String>,

    /// Minimum years of experience
    #[arg(long, default_value_t = 0.0)]
    pub min_exp: f64,

    /// Sort key: score, experience, or name
    #[arg(long, default_value = "score")]
    pub sort: String,

    /// Page to display (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Candidates per page
    #[arg(long, default_value_t = 6)]
    pub page_size: usize,
}

impl FilterArgs {
    /// Applies the flags to the session's filter state.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        session.set_page_size(self.page_size.max(1));
        if let Some(query) = &self.query {
            session.set_query(query.clone());
        }
        if let Some(skills) = &self.skills {
            session.add_required_skills(skills);
        }
        session.set_min_experience(self.min_exp);

        let sort_key = match self.sort.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(()) => bail!(
                "unknown sort key '{}': expected score, experience, or name",
                self.sort
            ),
        };
        session.set_sort_key(sort_key);
        session.set_page(self.page);
        Ok(())
    }
}
