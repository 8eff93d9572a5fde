use ranker_lib::types::Candidate;
use ranker_lib::Session;
use tabled::{Table, Tabled};

/// How many skills a table row shows before truncating with a `+n`
/// marker.
const SKILLS_SHOWN: usize = 6;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Exp (yrs)")]
    experience: String,
    #[tabled(rename = "Skills")]
    skills: String,
}

fn build_candidate_rows(candidates: &[Candidate], rank_offset: usize) -> Vec<CandidateRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| CandidateRow {
            rank: rank_offset + idx + 1,
            name: c.display_name().to_string(),
            email: c.email().to_string(),
            score: format_score(c.score()),
            experience: format!("{}", c.years_experience()),
            skills: format_skills(c.skills()),
        })
        .collect()
}

fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

fn format_skills(skills: &[String]) -> String {
    let shown = skills.iter().take(SKILLS_SHOWN).cloned().collect::<Vec<_>>();
    let mut text = shown.join(", ");
    if skills.len() > SKILLS_SHOWN {
        text.push_str(&format!(" +{}", skills.len() - SKILLS_SHOWN));
    }
    text
}

/// Prints the session's current view in the requested format. Table and
/// json cover the visible page; csv covers the full filtered set, the
/// same content the export action writes.
pub fn print_view(session: &Session, format: &OutputFormat) {
    let slice = session.visible();
    match format {
        OutputFormat::Table => {
            let offset = (session.page() - 1) * session.page_size();
            if slice.visible.is_empty() {
                println!("No candidates match your filters.");
            } else {
                println!("{}", Table::new(build_candidate_rows(&slice.visible, offset)));
            }
            println!(
                "Page {} / {}  ({} candidates)",
                session.page(),
                slice.page_count,
                slice.total
            );
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&slice.visible) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
        },
        OutputFormat::Csv => {
            println!("{}", session.export_csv());
        }
    }
}
