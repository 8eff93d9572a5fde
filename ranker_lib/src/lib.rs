//! View-model core for the candidate-ranking client.
//!
//! Wraps the `ranker_api` client with the client-side logic the list view
//! needs: the filter/sort/paginate pipeline, ranking-weight validation,
//! CSV export, the per-candidate AI detail fetch, and the session that
//! ties them together.

pub mod detail;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod session;
pub mod weights;

pub use ranker_api;
pub use ranker_api::types;

pub use detail::{Assessment, DetailState, DetailView, FetchTicket};
pub use error::RankerError;
pub use pipeline::{FilterState, SortKey, ViewSlice};
pub use session::Session;
pub use weights::{Criterion, ValidatedWeights, WeightSet};
