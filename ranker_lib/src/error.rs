//! Error types for the view-model layer.

use std::fmt;

/// Errors produced by the view-model layer, wrapping upstream API errors
/// and adding validation and session-state failures.
#[derive(Debug)]
pub enum RankerError {
    /// An error from the underlying service client.
    Api(ranker_api::Error),
    /// A weight set failed the sum-to-one check.
    InvalidWeights(String),
    /// A list-level request is already in flight.
    Busy(&'static str),
    /// A rank was requested with no candidates loaded.
    NoCandidates,
    /// No loaded candidate has the given identifier.
    UnknownCandidate(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for RankerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidWeights(msg) => write!(f, "Invalid weights: {}", msg),
            Self::Busy(msg) => write!(f, "Busy: {}", msg),
            Self::NoCandidates => write!(f, "No candidates loaded"),
            Self::UnknownCandidate(id) => write!(f, "Unknown candidate: {}", id),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for RankerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ranker_api::Error> for RankerError {
    fn from(e: ranker_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for RankerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
