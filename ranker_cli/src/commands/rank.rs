//! The `rank` subcommand: server-side ranking with configurable weights.

use anyhow::{bail, Context, Result};
use clap::Args;
use ranker_lib::{Criterion, Session, WeightSet};

use crate::output::{print_view, OutputFormat};

use super::FilterArgs;

#[derive(Args)]
pub struct RankArgs {
    /// Criterion weights as `key=value` pairs, comma-separated
    /// (e.g. `skills=0.4,experience=0.3,education=0.3`). Unspecified
    /// criteria are set to 0; the six weights must sum to 1.0.
    #[arg(long)]
    pub weights: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Parses `key=value,...` into a weight set. Every criterion not named
/// is zeroed so the sum check applies to exactly what the user typed.
fn parse_weights(raw: &str) -> Result<WeightSet> {
    let mut set = WeightSet::default();
    for criterion in Criterion::ALL {
        set.set(criterion, 0.0);
    }

    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid weight '{}': expected key=value", pair);
        };
        let Ok(criterion) = key.trim().parse::<Criterion>() else {
            bail!(
                "unknown criterion '{}': expected one of skills, experience, \
                 education, assessment, portfolio, cover_letter",
                key.trim()
            );
        };
        set.set_raw(criterion, value);
    }
    Ok(set)
}

pub async fn run(args: &RankArgs, session: &mut Session, format: &OutputFormat) -> Result<()> {
    if let Some(raw) = &args.weights {
        let validated = parse_weights(raw)?.validate()?;
        session.apply_weights(validated);
    }

    session
        .load_sample()
        .await
        .with_context(|| banner(session))?;
    args.filters.apply(session)?;

    session.rank().await.with_context(|| banner(session))?;
    // A successful rank resets the view to page 1; the user's flag still
    // decides what gets printed.
    session.set_page(args.filters.page);
    print_view(session, format);
    Ok(())
}

fn banner(session: &Session) -> String {
    session
        .error_banner()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranker_lib::ranker_api::Client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn roster_json(count: usize) -> String {
        let list: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "id": format!("c-{:02}", i),
                    "name": format!("Candidate {:02}", i),
                    "score": 1.0 - i as f64 / 100.0
                })
            })
            .collect();
        serde_json::Value::Array(list).to_string()
    }

    #[tokio::test]
    async fn page_flag_survives_a_successful_rank() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sample-data"))
            .respond_with(ResponseTemplate::new(200).set_body_string(roster_json(14)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rank"))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                "{{\"ranked\": {}}}",
                roster_json(14)
            )))
            .mount(&server)
            .await;

        let mut session = Session::new(Client::with_base_url(&server.uri()), "job");
        let args = RankArgs {
            weights: None,
            filters: FilterArgs {
                query: None,
                skills: None,
                min_exp: 0.0,
                sort: "score".to_string(),
                page: 2,
                page_size: 6,
            },
        };

        run(&args, &mut session, &crate::output::OutputFormat::Table)
            .await
            .unwrap();

        assert_eq!(session.page(), 2);
        let slice = session.visible();
        assert_eq!(slice.visible.len(), 6);
        assert_eq!(slice.visible[0].display_name(), "Candidate 06");
    }

    #[test]
    fn parse_weights_zeroes_unnamed_criteria() {
        let set = parse_weights("skills=0.5,experience=0.5").unwrap();
        assert_eq!(set.get(Criterion::Skills), 0.5);
        assert_eq!(set.get(Criterion::Education), 0.0);
        assert!(set.is_valid());
    }

    #[test]
    fn parse_weights_rejects_unknown_criterion() {
        assert!(parse_weights("charisma=1.0").is_err());
        assert!(parse_weights("skills").is_err());
    }

    #[test]
    fn unparseable_weight_value_coerces_to_zero() {
        let set = parse_weights("skills=abc,experience=1.0").unwrap();
        assert_eq!(set.get(Criterion::Skills), 0.0);
        assert!(set.is_valid());
    }

    #[test]
    fn off_by_more_than_tolerance_fails_validation() {
        let set = parse_weights("skills=0.5,experience=0.6").unwrap();
        assert!(set.validate().is_err());
    }
}
