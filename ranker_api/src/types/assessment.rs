//! Request and response bodies for the per-candidate AI scoring endpoint.

use serde::{Deserialize, Serialize};

use super::Candidate;

/// Body of `POST /ai-score`: one candidate plus the job description the
/// assessment is made against.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AiScoreRequest {
    pub candidate: Candidate,
    pub job_description: String,
}

/// Body of a `POST /ai-score` response. The service answers with either a
/// score/summary pair or an error object, both under HTTP 200, so the two
/// shapes are distinguished structurally.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AiScoreResponse {
    Scored { score: f64, summary: String },
    Error { error: String },
}
