//! The view orchestrator: owns the candidate list and all view state.
//!
//! One `Session` backs one mounted view. All work is driven by the
//! caller's event handling; the session never spawns background tasks.
//! List-level requests (load, rank) share one in-flight guard: at most
//! one may be outstanding at a time, and a second issue attempt is
//! refused rather than raced. The detail fetch is an independent request
//! category and runs concurrently with list-level requests.

use ranker_api::types::{AiScoreRequest, AiScoreResponse, Candidate, RankRequest};
use ranker_api::Client;

use crate::detail::{Assessment, DetailState, DetailView};
use crate::error::RankerError;
use crate::export;
use crate::pipeline::{self, FilterState, SortKey, ViewSlice};
use crate::weights::ValidatedWeights;

/// Candidates shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// In-memory view-model over candidates supplied by the scoring service.
pub struct Session {
    client: Client,
    /// Fixed job description sent with every AI assessment request.
    job_description: String,
    candidates: Vec<Candidate>,
    filters: FilterState,
    page: usize,
    page_size: usize,
    weights: Option<ValidatedWeights>,
    detail: DetailView,
    error_banner: Option<String>,
    list_request_pending: bool,
}

impl Session {
    pub fn new(client: Client, job_description: impl Into<String>) -> Self {
        Self {
            client,
            job_description: job_description.into(),
            candidates: Vec::new(),
            filters: FilterState::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            weights: None,
            detail: DetailView::new(),
            error_banner: None,
            list_request_pending: false,
        }
    }

    // -- List-level requests --

    fn begin_list_request(&mut self) -> Result<(), RankerError> {
        if self.list_request_pending {
            return Err(RankerError::Busy("a list request is already in flight"));
        }
        self.list_request_pending = true;
        Ok(())
    }

    /// Loads the sample candidate list, replacing the current one.
    ///
    /// On failure the banner is set and the current list is left
    /// untouched. Records without a stable identifier get one synthesized
    /// here, so nothing downstream falls back to positional indexes.
    pub async fn load_sample(&mut self) -> Result<usize, RankerError> {
        self.begin_list_request()?;
        let result = self.client.sample_data().await;
        self.list_request_pending = false;

        match result {
            Ok(mut candidates) => {
                assign_stable_ids(&mut candidates);
                let count = candidates.len();
                self.candidates = candidates;
                self.error_banner = None;
                self.page = 1;
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("sample data load failed: {}", e);
                self.error_banner = Some(format!(
                    "Could not load sample candidates. Ensure the backend is reachable at {}",
                    self.client.base_url()
                ));
                Err(e.into())
            }
        }
    }

    /// Sends the current list for ranking and replaces it with the
    /// service's ordering. A failed rank never destroys loaded data.
    pub async fn rank(&mut self) -> Result<usize, RankerError> {
        if self.candidates.is_empty() {
            self.error_banner =
                Some("No applicants to rank. Load sample data first.".to_string());
            return Err(RankerError::NoCandidates);
        }
        self.begin_list_request()?;

        let mut request = RankRequest::new(self.candidates.clone());
        if !self.filters.required_skills.is_empty() {
            request.required_skills = Some(self.filters.required_skills.clone());
        }
        if let Some(weights) = &self.weights {
            request.weights = Some(weights.to_wire());
        }

        let result = self.client.rank(&request).await;
        self.list_request_pending = false;

        match result {
            Ok(resp) => {
                let mut ranked = resp.ranked;
                assign_stable_ids(&mut ranked);
                let count = ranked.len();
                self.candidates = ranked;
                self.error_banner = None;
                self.page = 1;
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("rank request failed: {}", e);
                self.error_banner = Some(format!(
                    "Ranking failed. Ensure the backend is reachable at {}",
                    self.client.base_url()
                ));
                Err(e.into())
            }
        }
    }

    /// Stores a validated weight set for the next rank request.
    pub fn apply_weights(&mut self, weights: ValidatedWeights) {
        self.weights = Some(weights);
    }

    // -- View state --

    /// Runs the pipeline over the current list. The stored page is
    /// clamped on read into `[1, page_count]`, so narrowing a filter
    /// while deep in the list lands on the last populated page instead
    /// of an empty one.
    pub fn visible(&self) -> ViewSlice {
        let filtered = pipeline::filter_sort(&self.candidates, &self.filters);
        let pages = pipeline::page_count(filtered.len(), self.page_size);
        pipeline::paginate(&filtered, self.page.clamp(1, pages), self.page_size)
    }

    /// The page actually displayed, after clamping.
    pub fn page(&self) -> usize {
        let filtered = pipeline::filter_sort(&self.candidates, &self.filters);
        self.page
            .clamp(1, pipeline::page_count(filtered.len(), self.page_size))
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
        self.page = 1;
    }

    /// Adds comma-separated skills to the required set.
    pub fn add_required_skills(&mut self, raw: &str) {
        self.filters.add_required_skills(raw);
        self.page = 1;
    }

    pub fn remove_required_skill(&mut self, skill: &str) {
        self.filters.remove_required_skill(skill);
        self.page = 1;
    }

    pub fn set_min_experience(&mut self, years: f64) {
        self.filters.min_experience = years.max(0.0);
        self.page = 1;
    }

    pub fn set_sort_key(&mut self, sort_key: Option<SortKey>) {
        self.filters.sort_key = sort_key;
        self.page = 1;
    }

    /// Restores every filter control and the page to its default.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.page = 1;
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    pub fn is_list_request_pending(&self) -> bool {
        self.list_request_pending
    }

    // -- Export --

    /// Encodes the full filtered and sorted set, not just the current
    /// page.
    pub fn export_csv(&self) -> String {
        export::to_csv(&pipeline::filter_sort(&self.candidates, &self.filters))
    }

    // -- Detail view --

    pub fn find_candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
    }

    /// Selects the candidate and fetches its AI assessment. Failures land
    /// in the detail state, never in the list-level banner.
    pub async fn assess(&mut self, id: &str) -> Result<&DetailState, RankerError> {
        let candidate = self
            .find_candidate(id)
            .cloned()
            .ok_or_else(|| RankerError::UnknownCandidate(id.to_string()))?;

        let ticket = self.detail.select(candidate.clone());
        let request = AiScoreRequest {
            candidate,
            job_description: self.job_description.clone(),
        };

        let outcome = match self.client.ai_score(&request).await {
            Ok(AiScoreResponse::Scored { score, summary }) => Ok(Assessment { score, summary }),
            Ok(AiScoreResponse::Error { error }) => Err(error),
            Err(e) => {
                tracing::warn!("ai score request failed: {}", e);
                Err(format!("AI assessment failed: {}", e))
            }
        };
        self.detail.resolve(ticket, outcome);
        Ok(self.detail.state())
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }
}

/// Gives every record a stable identifier, synthesized from its load
/// position when the service supplied none. Runs once per list replace,
/// so later re-sorts and filters never change an id.
fn assign_stable_ids(candidates: &mut [Candidate]) {
    for (idx, candidate) in candidates.iter_mut().enumerate() {
        if candidate.id.as_deref().map_or(true, str::is_empty) {
            candidate.id = Some(format!("candidate-{}", idx + 1));
        }
    }
}
