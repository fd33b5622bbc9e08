use std::time::Duration;

use crate::data::ApiError;
use crate::domain::{ChartRecord, FetchWindow, Interval};

/// What started a fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    IntervalChanged,
    Manual,
    Timer,
}

/// A request to fetch and align one snapshot of the three series
#[derive(Debug, Clone, PartialEq)]
pub struct CycleRequest {
    /// Monotonic cycle number; results for older generations are discarded
    pub generation: u64,
    pub trigger: Trigger,
    pub symbol: String,
    pub interval: Interval,
    pub window: FetchWindow,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct CycleResult {
    pub generation: u64,
    pub interval: Interval,
    pub window: FetchWindow,
    pub elapsed: Duration,

    // Success: aligned records (possibly empty)
    // Failure: the first failing request
    pub outcome: Result<Vec<ChartRecord>, ApiError>,
}
