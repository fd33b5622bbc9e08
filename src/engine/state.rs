use std::fmt;

use crate::domain::{ChartRecord, FetchWindow, Interval};

/// User-facing reasons for showing no chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    /// The cycle succeeded but the backend had no candles for the window
    NoData,
    /// At least one of the three requests failed; details go to the log only
    FetchFailed,
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::NoData => write!(f, "No data available for the selected time range"),
            DashboardError::FetchFailed => write!(f, "Failed to fetch data"),
        }
    }
}

impl std::error::Error for DashboardError {}

/// One successfully loaded, aligned snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub interval: Interval,
    pub window: FetchWindow,
    pub records: Vec<ChartRecord>,
}

/// Lifecycle of the dashboard's data.
///
/// idle -> loading on mount; loading -> ready | error when the cycle
/// resolves; ready/error -> loading on the next trigger.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        generation: u64,
        /// Last good snapshot, kept on screen until this cycle resolves
        stale: Option<ChartSeries>,
        /// Last failure, kept in the banner until this cycle resolves
        last_error: Option<DashboardError>,
    },
    Ready(ChartSeries),
    Error(DashboardError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    /// The snapshot currently worth drawing, if any.
    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            LoadState::Ready(series) => Some(series),
            LoadState::Loading { stale, .. } => stale.as_ref(),
            LoadState::Idle | LoadState::Error(_) => None,
        }
    }

    /// The failure worth showing, including one carried through a retry.
    pub fn error(&self) -> Option<DashboardError> {
        match self {
            LoadState::Error(e) => Some(*e),
            LoadState::Loading { last_error, .. } => *last_error,
            LoadState::Idle | LoadState::Ready(_) => None,
        }
    }

    /// Moves the drawable snapshot and the visible error out, leaving `Idle` behind.
    /// At most one of the two is ever present.
    pub(crate) fn take_visible(&mut self) -> (Option<ChartSeries>, Option<DashboardError>) {
        match std::mem::take(self) {
            LoadState::Ready(series) => (Some(series), None),
            LoadState::Loading { stale, last_error, .. } => (stale, last_error),
            LoadState::Error(e) => (None, Some(e)),
            LoadState::Idle => (None, None),
        }
    }
}
