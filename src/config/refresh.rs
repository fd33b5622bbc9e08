//! Polling cadence and request window configuration

use std::time::Duration;

use crate::utils::TimeUtils;

pub struct RefreshConfig {
    /// How often the dashboard re-runs a fetch cycle without user action
    pub period: Duration,
    /// Width of the trailing request window that ends at "now"
    pub window_ms: i64,
}

pub const REFRESH: RefreshConfig = RefreshConfig {
    period: Duration::from_secs(60),
    window_ms: TimeUtils::MS_IN_H,
};
