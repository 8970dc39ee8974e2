//! Search session state machine.
//!
//! ```text
//! Idle ──submit──▶ Loading ──▶ Success(view-model)
//!                     │
//!                     └──────▶ Error(failure)
//! ```
//!
//! Any state goes straight back to `Loading` on the next submit. Each submit
//! opens a new session with a fresh id; a completion carrying an older
//! session's [`SearchTicket`] is dropped, so a late response can never
//! overwrite a newer search.

use tracing::{debug, info, warn};

use crate::chart::{self, ChartSurface};
use crate::config::{self, Milestone};
use crate::error::{PriceFinderError, Result};
use crate::models::{SearchRequest, SearchResponse};
use crate::view::ViewModel;

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// The external search call.
pub trait SearchBackend {
    /// Any `Err` is treated as a transport failure.
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// The presentation layer a session drives.
pub trait Presenter: ChartSurface {
    fn progress(&mut self, milestone: Milestone);
    fn hide_progress(&mut self);
    /// Hide results and errors from the previous search.
    fn clear(&mut self);
    fn show_results(&mut self, view: &ViewModel);
    fn show_error(&mut self, failure: &SearchFailure);
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The call itself failed.
    Transport,
    /// The service answered with `success: false`. The message is the
    /// server's. A search that matched nothing usually lands here, since the
    /// service reports it as a 404 with a failure envelope.
    Payload,
    /// The service answered `success: true` but no listing with a usable
    /// price survived. Presenters showing an empty state should treat this
    /// and a not-found [`Payload`](FailureKind::Payload) alike.
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success(ViewModel),
    Error(SearchFailure),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    pub id: u64,
    pub phase: SearchPhase,
    /// `None` once the progress display has been cleared.
    pub progress: Option<u8>,
    pub status: String,
}

impl SearchSession {
    fn idle() -> Self {
        Self {
            id: 0,
            phase: SearchPhase::Idle,
            progress: None,
            status: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading)
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        match &self.phase {
            SearchPhase::Success(view) => Some(view),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&SearchFailure> {
        match &self.phase {
            SearchPhase::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Identifies the session a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket to `complete` with the search outcome"]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn session_id(&self) -> u64 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// SearchOrchestrator
// ---------------------------------------------------------------------------

pub struct SearchOrchestrator<P: Presenter> {
    presenter: P,
    session: SearchSession,
    chart: Option<P::Chart>,
}

impl<P: Presenter> SearchOrchestrator<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            session: SearchSession::idle(),
            chart: None,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Run one search to completion against `backend`.
    ///
    /// Returns `Err` only for an invalid request, in which case the current
    /// session is left untouched. Search failures end up in the session.
    pub fn submit<B>(&mut self, backend: &B, request: &SearchRequest) -> Result<&SearchSession>
    where
        B: SearchBackend + ?Sized,
    {
        let ticket = self.begin(request)?;
        let outcome = backend.search(request);
        self.complete(ticket, outcome);
        Ok(&self.session)
    }

    /// Open a new session and move it to `Loading`.
    ///
    /// Issue the search call after this returns, then hand its outcome to
    /// [`complete`](Self::complete) together with the ticket.
    pub fn begin(&mut self, request: &SearchRequest) -> Result<SearchTicket> {
        request.validate()?;

        let id = self.session.id + 1;
        info!(session = id, product = %request.product_name, "Search submitted");
        self.session = SearchSession {
            id,
            phase: SearchPhase::Loading,
            progress: None,
            status: String::new(),
        };

        self.advance(config::SUBMITTED);
        self.presenter.clear();
        self.advance(config::CONNECTING);
        Ok(SearchTicket(id))
    }

    /// Apply the outcome of the search call opened by `ticket`.
    ///
    /// Returns `false` and changes nothing when a newer search has been
    /// submitted since.
    pub fn complete(&mut self, ticket: SearchTicket, outcome: Result<SearchResponse>) -> bool {
        if ticket.0 != self.session.id || !self.session.is_loading() {
            warn!(
                stale = ticket.0,
                current = self.session.id,
                "Ignoring response for a superseded search"
            );
            return false;
        }

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                warn!(session = ticket.0, error = %e, "Search call failed");
                self.fail(FailureKind::Transport, config::CONNECTIVITY_ERROR_MESSAGE);
                return true;
            }
        };

        let data = match response.into_data(config::PAYLOAD_ERROR_FALLBACK) {
            Ok(data) => data,
            Err(e) => {
                let message = match e {
                    PriceFinderError::Payload(message) => message,
                    other => other.to_string(),
                };
                self.fail(FailureKind::Payload, &message);
                return true;
            }
        };

        self.advance(config::ANALYZING);
        let view = match ViewModel::build(data) {
            Ok(view) => view,
            Err(PriceFinderError::EmptyInput) => {
                self.fail(FailureKind::NoResults, config::NO_RESULTS_MESSAGE);
                return true;
            }
            Err(e) => {
                self.fail(FailureKind::Payload, &e.to_string());
                return true;
            }
        };

        self.advance(config::FINALIZING);
        let chart = chart::rebuild(&mut self.presenter, self.chart.take(), &view.chart);
        self.chart = Some(chart);
        self.presenter.show_results(&view);
        self.advance(config::COMPLETE);

        info!(
            session = ticket.0,
            listings = view.listings.len(),
            "Search complete"
        );
        self.session.phase = SearchPhase::Success(view);
        true
    }

    fn advance(&mut self, milestone: Milestone) {
        debug!(
            session = self.session.id,
            percent = milestone.percent,
            "{}",
            milestone.message
        );
        self.session.progress = Some(milestone.percent);
        self.session.status = milestone.message.to_string();
        self.presenter.progress(milestone);
    }

    fn fail(&mut self, kind: FailureKind, message: &str) {
        let failure = SearchFailure {
            kind,
            message: message.to_string(),
        };
        self.session.progress = None;
        self.session.status = failure.message.clone();
        self.presenter.hide_progress();
        self.presenter.show_error(&failure);
        self.session.phase = SearchPhase::Error(failure);
    }
}
