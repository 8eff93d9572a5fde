//! The filter/sort/paginate pipeline over a loaded candidate list.
//!
//! Pure functions only: the same inputs always produce the same
//! [`ViewSlice`], and nothing here touches the network or mutates the
//! input list.

use ranker_api::types::Candidate;

/// Sort order for the filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Service score, descending. This is the default.
    #[default]
    Score,
    /// Years of experience, descending.
    Experience,
    /// Display name, ascending, case-insensitive.
    Name,
}

impl std::str::FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" => Ok(SortKey::Score),
            "experience" => Ok(SortKey::Experience),
            "name" => Ok(SortKey::Name),
            _ => Err(()),
        }
    }
}

/// User-controlled filter and sort state.
///
/// Created at view mount with every control at its default, mutated only
/// by user interaction, and reset wholesale by the reset action. A
/// `sort_key` of `None` leaves the incoming order untouched.
#[derive(Clone, Debug)]
pub struct FilterState {
    /// Free-text query matched case-insensitively against name, email,
    /// and notes. Empty or whitespace-only matches everything.
    pub query: String,
    /// Skills a candidate must all have (exact match). Deduplicated on
    /// insert; empty matches everything.
    pub required_skills: Vec<String>,
    /// Experience floor in years. 0 matches everything, including
    /// candidates with no recorded experience.
    pub min_experience: f64,
    pub sort_key: Option<SortKey>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            required_skills: Vec::new(),
            min_experience: 0.0,
            sort_key: Some(SortKey::Score),
        }
    }
}

impl FilterState {
    /// Adds skills from a comma-separated string, trimming whitespace and
    /// skipping entries already present.
    pub fn add_required_skills(&mut self, raw: &str) {
        for part in raw.split(',') {
            let skill = part.trim();
            if !skill.is_empty() && !self.required_skills.iter().any(|s| s == skill) {
                self.required_skills.push(skill.to_string());
            }
        }
    }

    pub fn remove_required_skill(&mut self, skill: &str) {
        self.required_skills.retain(|s| s != skill);
    }

    fn matches(&self, candidate: &Candidate, query: &str) -> bool {
        if !query.is_empty() {
            let hit = candidate.display_name().to_lowercase().contains(query)
                || candidate.email().to_lowercase().contains(query)
                || candidate.notes().to_lowercase().contains(query);
            if !hit {
                return false;
            }
        }

        if !self
            .required_skills
            .iter()
            .all(|s| candidate.skills().contains(s))
        {
            return false;
        }

        candidate.years_experience() >= self.min_experience
    }
}

/// The portion of the filtered list shown on one page, plus the totals
/// the pagination controls need.
#[derive(Clone, Debug)]
pub struct ViewSlice {
    pub visible: Vec<Candidate>,
    /// Size of the full filtered set, across all pages.
    pub total: usize,
    pub page_count: usize,
}

/// Filters conjunctively, then sorts the full filtered set.
///
/// `Vec::sort_by` is stable, so candidates comparing equal keep their
/// incoming relative order.
pub fn filter_sort(candidates: &[Candidate], state: &FilterState) -> Vec<Candidate> {
    let query = state.query.trim().to_lowercase();
    let mut list: Vec<Candidate> = candidates
        .iter()
        .filter(|c| state.matches(c, &query))
        .cloned()
        .collect();

    match state.sort_key {
        Some(SortKey::Score) => list.sort_by(|a, b| b.score().total_cmp(&a.score())),
        Some(SortKey::Experience) => {
            list.sort_by(|a, b| b.years_experience().total_cmp(&a.years_experience()))
        }
        Some(SortKey::Name) => list.sort_by(|a, b| {
            a.display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase())
        }),
        None => {}
    }

    list
}

/// `max(1, ceil(total / page_size))`, so an empty list still has one
/// (empty) page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slices one 1-based page out of an already filtered and sorted list.
///
/// Does not clamp: a page beyond `page_count` yields an empty visible
/// slice, and the caller is expected to clamp before slicing.
pub fn paginate(list: &[Candidate], page: usize, page_size: usize) -> ViewSlice {
    let total = list.len();
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let visible = if start >= total {
        Vec::new()
    } else {
        list[start..(start + page_size).min(total)].to_vec()
    };
    ViewSlice {
        visible,
        total,
        page_count: page_count(total, page_size),
    }
}

/// The full pipeline: filter, sort, slice.
pub fn apply(
    candidates: &[Candidate],
    state: &FilterState,
    page: usize,
    page_size: usize,
) -> ViewSlice {
    paginate(&filter_sort(candidates, state), page, page_size)
}
