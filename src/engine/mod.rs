pub mod core;
pub mod messages;
pub mod schedule;
pub mod state;
pub mod worker;

// Re-export key components
pub use core::RefreshController;
pub use messages::{CycleRequest, CycleResult, Trigger};
pub use schedule::RefreshSchedule;
pub use state::{ChartSeries, DashboardError, LoadState};
pub use worker::run_fetch_cycle;
