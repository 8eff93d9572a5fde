//! Per-candidate detail view and its AI assessment fetch state.
//!
//! Selection is a single-item replace: picking a candidate starts one
//! fetch and invalidates any outstanding one. Each selection gets a
//! monotonically increasing token, and a response is applied only if its
//! ticket still matches, so a slow response for a previously selected
//! candidate can never populate another candidate's panel.

use ranker_api::types::Candidate;

/// The AI assessment displayed in the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub summary: String,
}

/// Fetch state of the detail view, independent of the list-level
/// loading state. `Failed` is distinct from `Idle`: one renders an error
/// marker, the other renders "no data yet".
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Succeeded(Assessment),
    Failed(String),
}

/// Proof of which selection a fetch belongs to. Returned by
/// [`DetailView::select`] and surrendered to [`DetailView::resolve`].
#[derive(Clone, Copy, Debug)]
pub struct FetchTicket {
    token: u64,
}

/// The detail view: at most one selected candidate plus the state of its
/// assessment fetch.
#[derive(Debug, Default)]
pub struct DetailView {
    selected: Option<Candidate>,
    state: DetailState,
    token: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection and moves to `Loading`. Any ticket from an
    /// earlier selection is stale from this point on.
    pub fn select(&mut self, candidate: Candidate) -> FetchTicket {
        self.token += 1;
        self.selected = Some(candidate);
        self.state = DetailState::Loading;
        FetchTicket { token: self.token }
    }

    /// Applies a fetch outcome if the ticket still matches the current
    /// selection. Returns false when the response was stale and
    /// discarded.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Assessment, String>,
    ) -> bool {
        if ticket.token != self.token || self.selected.is_none() {
            return false;
        }
        self.state = match outcome {
            Ok(assessment) => DetailState::Succeeded(assessment),
            Err(message) => DetailState::Failed(message),
        };
        true
    }

    /// Closes the view, discarding the selection and all fetched state.
    /// Reopening the same candidate always re-fetches.
    pub fn close(&mut self) {
        self.token += 1;
        self.selected = None;
        self.state = DetailState::Idle;
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.selected.as_ref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Candidate {
        Candidate {
            name: Some(name.to_string()),
            ..Candidate::default()
        }
    }

    fn assessment(score: f64) -> Assessment {
        Assessment {
            score,
            summary: "fine".to_string(),
        }
    }

    #[test]
    fn select_starts_loading() {
        let mut view = DetailView::new();
        assert_eq!(*view.state(), DetailState::Idle);

        view.select(named("Aisha"));
        assert_eq!(*view.state(), DetailState::Loading);
        assert_eq!(view.selected().unwrap().display_name(), "Aisha");
    }

    #[test]
    fn resolve_applies_matching_ticket() {
        let mut view = DetailView::new();
        let ticket = view.select(named("Aisha"));
        assert!(view.resolve(ticket, Ok(assessment(85.0))));
        assert_eq!(*view.state(), DetailState::Succeeded(assessment(85.0)));
    }

    #[test]
    fn stale_response_never_clobbers_a_newer_selection() {
        let mut view = DetailView::new();
        let ticket_a = view.select(named("Aisha"));
        let ticket_b = view.select(named("Ben"));

        // A's response arrives after B was selected: discarded.
        assert!(!view.resolve(ticket_a, Ok(assessment(99.0))));
        assert_eq!(*view.state(), DetailState::Loading);
        assert_eq!(view.selected().unwrap().display_name(), "Ben");

        assert!(view.resolve(ticket_b, Ok(assessment(42.0))));
        assert_eq!(*view.state(), DetailState::Succeeded(assessment(42.0)));
    }

    #[test]
    fn failure_is_distinct_from_idle() {
        let mut view = DetailView::new();
        let ticket = view.select(named("Aisha"));
        assert!(view.resolve(ticket, Err("backend unreachable".to_string())));
        assert_eq!(
            *view.state(),
            DetailState::Failed("backend unreachable".to_string())
        );
    }

    #[test]
    fn close_discards_state_and_invalidates_tickets() {
        let mut view = DetailView::new();
        let ticket = view.select(named("Aisha"));
        view.close();

        assert!(view.selected().is_none());
        assert_eq!(*view.state(), DetailState::Idle);
        // The in-flight response lands after close: ignored.
        assert!(!view.resolve(ticket, Ok(assessment(85.0))));
        assert_eq!(*view.state(), DetailState::Idle);
    }

    #[test]
    fn reopening_restarts_the_fetch() {
        let mut view = DetailView::new();
        let first = view.select(named("Aisha"));
        assert!(view.resolve(first, Ok(assessment(85.0))));
        view.close();

        view.select(named("Aisha"));
        assert_eq!(*view.state(), DetailState::Loading);
    }
}
