//! Request and response bodies for the bulk ranking endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Candidate;

/// Body of `POST /rank`.
///
/// `required_skills` and `weights` are optional; the service falls back to
/// its own defaults when they are omitted. The skills key is camelCase on
/// the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankRequest {
    pub applicants: Vec<Candidate>,

    #[serde(
        rename = "requiredSkills",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_skills: Option<Vec<String>>,

    /// Criterion name -> weight. Must already be validated client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, f64>>,
}

impl RankRequest {
    pub fn new(applicants: Vec<Candidate>) -> Self {
        Self {
            applicants,
            required_skills: None,
            weights: None,
        }
    }
}

/// Body of a successful `POST /rank` response. A missing `ranked` field
/// deserializes as an empty list rather than an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(default)]
    pub ranked: Vec<Candidate>,
}
