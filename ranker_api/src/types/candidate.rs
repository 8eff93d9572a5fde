//! The applicant record returned by the scoring service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unique identifier for a candidate within a loaded list.
pub type CandidateID = String;

/// One applicant record.
///
/// The service treats every field as optional, so each one deserializes
/// from a sparse object without error. Consumers go through the accessor
/// methods, which substitute the documented defaults (0, empty slice,
/// empty string) instead of propagating absence. Fields the service adds
/// that this client does not know about are preserved in `extra` so a
/// record survives a serialize round trip intact.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CandidateID>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,

    /// Ordered list of skill strings. Order matters for display truncation
    /// only, not for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<f64>,

    /// Overall score computed by the service. Displayed with 3-decimal
    /// precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Criterion name -> fraction in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<BTreeMap<String, f64>>,

    /// Assessment name -> numeric score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_scores: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_present: Option<bool>,

    /// Service fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Candidate {
    /// Name for display and sorting; empty string when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    pub fn years_experience(&self) -> f64 {
        self.years_experience.unwrap_or(0.0)
    }

    pub fn score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}
