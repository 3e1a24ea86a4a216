// src/application/load.rs
use crate::application::api::FetchOutcome;
use tracing::debug;

/// Lifecycle of a view's remote data: `Idle → Loading → {Populated | Empty}`
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Populated(T),
    Empty,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            LoadState::Populated(data) => Some(data),
            _ => None,
        }
    }
}

/// Identifies one issued fetch; only the latest one may commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues monotonically increasing request tokens and remembers the latest.
///
/// Any change of a view's fetch inputs must call `invalidate` or `issue`, so that a
/// response belonging to older inputs is discarded instead of overwriting newer state.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Data plus bookkeeping shared by all views
#[derive(Debug)]
pub struct Loadable<T> {
    state: LoadState<T>,
    tracker: RequestTracker,
    last_failure: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            tracker: RequestTracker::default(),
            last_failure: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn begin(&mut self) -> RequestToken {
        self.state = LoadState::Loading;
        self.tracker.issue()
    }

    /// Drop outstanding requests and fall back to `Idle`
    pub fn reset(&mut self) {
        self.tracker.invalidate();
        self.state = LoadState::Idle;
    }

    /// Apply `outcome` if `token` is still current; returns whether it was applied
    pub fn commit(&mut self, token: RequestToken, outcome: FetchOutcome<T>) -> bool {
        if !self.tracker.is_current(token) {
            debug!(?token, "Discarding stale response");
            return false;
        }

        self.last_failure = outcome.failure().map(str::to_string);
        self.state = match outcome {
            FetchOutcome::Loaded(data) => LoadState::Populated(data),
            FetchOutcome::Empty | FetchOutcome::Failed(_) => LoadState::Empty,
        };
        true
    }
}
