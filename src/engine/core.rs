use std::time::Duration;

use crate::config::REFRESH;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{ChartRecord, FetchWindow, Interval};
use crate::utils::app_time::AppInstant;

use super::messages::{CycleRequest, CycleResult, Trigger};
use super::schedule::RefreshSchedule;
use super::state::{ChartSeries, DashboardError, LoadState};

/// Owns everything the view mutates: the selected interval, the dropdown
/// flag, the load state and the refresh deadline.
///
/// The controller never performs I/O. Each transition into `Loading` hands
/// back a `CycleRequest`; the caller runs it and feeds the `CycleResult`
/// into `complete`.
#[derive(Debug, Clone)]
pub struct RefreshController {
    symbol: String,
    interval: Interval,
    state: LoadState,
    menu_open: bool,
    generation: u64,
    window_ms: i64,
    schedule: RefreshSchedule,
}

impl RefreshController {
    pub fn new(symbol: impl Into<String>, interval: Interval) -> Self {
        Self::with_timing(symbol, interval, REFRESH.period, REFRESH.window_ms)
    }

    pub fn with_timing(
        symbol: impl Into<String>,
        interval: Interval,
        period: Duration,
        window_ms: i64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            state: LoadState::Idle,
            menu_open: false,
            generation: 0,
            window_ms,
            schedule: RefreshSchedule::new(period),
        }
    }

    // --- ACCESSORS ---

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn records(&self) -> &[ChartRecord] {
        self.state
            .series()
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.error().map(|e| e.to_string())
    }

    pub fn is_mounted(&self) -> bool {
        self.schedule.is_armed()
    }

    pub fn time_until_refresh(&self, now: AppInstant) -> Option<Duration> {
        self.schedule.remaining(now)
    }

    // --- TRIGGERS ---

    /// The view became visible. Only an idle controller starts a cycle.
    pub fn mount(&mut self, now: AppInstant, now_ms: i64) -> Option<CycleRequest> {
        if !matches!(self.state, LoadState::Idle) {
            return None;
        }
        Some(self.begin_cycle(Trigger::Mount, now, now_ms))
    }

    /// The view went away: stop the timer and orphan any in-flight cycle.
    pub fn unmount(&mut self) {
        self.schedule.cancel();
        self.generation += 1;
        self.menu_open = false;
        self.state = LoadState::Idle;
    }

    /// Manual refresh. Ignored while a cycle is in flight (the button is disabled).
    pub fn refresh(&mut self, now: AppInstant, now_ms: i64) -> Option<CycleRequest> {
        if self.is_loading() {
            return None;
        }
        Some(self.begin_cycle(Trigger::Manual, now, now_ms))
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Picking an option always closes the dropdown. A different interval
    /// starts one cycle immediately and supersedes any cycle in flight.
    pub fn select_interval(
        &mut self,
        interval: Interval,
        now: AppInstant,
        now_ms: i64,
    ) -> Option<CycleRequest> {
        self.menu_open = false;
        if interval == self.interval {
            return None;
        }
        self.interval = interval;
        Some(self.begin_cycle(Trigger::IntervalChanged, now, now_ms))
    }

    /// Fires the periodic refresh when it is due.
    ///
    /// A tick that lands while a cycle is still in flight is coalesced into
    /// that cycle: the deadline is re-armed and nothing new is started.
    pub fn poll_timer(&mut self, now: AppInstant, now_ms: i64) -> Option<CycleRequest> {
        if !self.schedule.is_due(now) {
            return None;
        }
        if self.is_loading() {
            self.schedule.arm(now);
            return None;
        }
        Some(self.begin_cycle(Trigger::Timer, now, now_ms))
    }

    // --- COMPLETION ---

    /// Applies a finished cycle. Returns false when the result belongs to a
    /// superseded generation and was dropped.
    pub fn complete(&mut self, result: CycleResult) -> bool {
        let current = match &self.state {
            LoadState::Loading { generation, .. } => *generation,
            _ => return false,
        };
        if result.generation != current {
            log::info!(
                "Discarding superseded fetch cycle #{} (current #{})",
                result.generation,
                current
            );
            return false;
        }

        self.state = match result.outcome {
            Ok(records) if records.is_empty() => {
                log::warn!(
                    "No candles for {} {} in [{}, {}]",
                    self.symbol,
                    result.interval,
                    result.window.start_ms,
                    result.window.end_ms
                );
                LoadState::Error(DashboardError::NoData)
            }
            Ok(records) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_cycles {
                    log::info!(
                        "Fetch cycle #{} loaded {} records in {:.2}s",
                        result.generation,
                        records.len(),
                        result.elapsed.as_secs_f32()
                    );
                }
                LoadState::Ready(ChartSeries {
                    interval: result.interval,
                    window: result.window,
                    records,
                })
            }
            Err(e) => {
                log::error!("Fetch cycle #{} failed: {}", result.generation, e);
                LoadState::Error(DashboardError::FetchFailed)
            }
        };
        true
    }

    // --- INTERNAL LOGIC ---

    fn begin_cycle(&mut self, trigger: Trigger, now: AppInstant, now_ms: i64) -> CycleRequest {
        self.generation += 1;
        let (stale, last_error) = self.state.take_visible();
        self.state = LoadState::Loading {
            generation: self.generation,
            stale,
            last_error,
        };
        self.schedule.arm(now);

        let request = CycleRequest {
            generation: self.generation,
            trigger,
            symbol: self.symbol.clone(),
            interval: self.interval,
            window: FetchWindow::trailing(now_ms, self.window_ms),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_cycles {
            log::info!(
                "Fetch cycle #{} ({:?}): {} {} [{} .. {}]",
                request.generation,
                request.trigger,
                request.symbol,
                request.interval,
                request.window.start_ms,
                request.window.end_ms
            );
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ApiError;
    use crate::domain::Candle;
    use crate::utils::app_time::now;

    const HOUR_MS: i64 = 3_600_000;
    const NOW_MS: i64 = 1_700_000_000_000;

    fn controller() -> RefreshController {
        RefreshController::with_timing("BTCUSDT", Interval::OneMinute, Duration::from_secs(60), HOUR_MS)
    }

    fn records(n: usize) -> Vec<ChartRecord> {
        (0..n)
            .map(|i| {
                ChartRecord::from_candle(Candle {
                    open_time: i as i64 * 60_000,
                    open: 1.0,
                    high: 2.0,
                    low: 0.5,
                    close: 1.5,
                    volume: 1.0,
                    close_time: i as i64 * 60_000 + 59_999,
                })
            })
            .collect()
    }

    fn result_for(req: &CycleRequest, outcome: Result<Vec<ChartRecord>, ApiError>) -> CycleResult {
        CycleResult {
            generation: req.generation,
            interval: req.interval,
            window: req.window,
            elapsed: Duration::from_millis(5),
            outcome,
        }
    }

    fn transport_error() -> ApiError {
        ApiError::Transport {
            endpoint: "macd",
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn mount_starts_one_cycle_with_trailing_hour_window() {
        let mut c = controller();
        let t0 = now();

        let req = c.mount(t0, NOW_MS).expect("idle controller should start a cycle");
        assert_eq!(req.trigger, Trigger::Mount);
        assert_eq!(req.window.end_ms, NOW_MS);
        assert_eq!(req.window.start_ms, NOW_MS - HOUR_MS);
        assert_eq!(req.symbol, "BTCUSDT");
        assert!(c.is_loading());
        assert!(c.is_mounted());

        // Second mount while loading is a no-op
        assert!(c.mount(t0, NOW_MS).is_none());
    }

    #[test]
    fn successful_cycle_becomes_ready() {
        let mut c = controller();
        let req = c.mount(now(), NOW_MS).unwrap();

        assert!(c.complete(result_for(&req, Ok(records(3)))));

        assert!(matches!(c.state(), LoadState::Ready(_)));
        assert_eq!(c.records().len(), 3);
        assert_eq!(c.error_message(), None);
    }

    #[test]
    fn empty_candles_show_no_data_message() {
        let mut c = controller();
        let req = c.mount(now(), NOW_MS).unwrap();

        c.complete(result_for(&req, Ok(Vec::new())));

        assert_eq!(
            c.error_message().as_deref(),
            Some("No data available for the selected time range")
        );
        assert!(c.records().is_empty());
    }

    #[test]
    fn failure_clears_previous_records() {
        let mut c = controller();
        let t0 = now();
        let first = c.mount(t0, NOW_MS).unwrap();
        c.complete(result_for(&first, Ok(records(5))));

        let second = c.refresh(t0, NOW_MS + 1_000).unwrap();
        // While loading the previous snapshot stays visible
        assert_eq!(c.records().len(), 5);

        c.complete(result_for(&second, Err(transport_error())));
        assert_eq!(c.error_message().as_deref(), Some("Failed to fetch data"));
        assert!(c.records().is_empty());
    }

    #[test]
    fn error_state_recovers_on_next_trigger() {
        let mut c = controller();
        let t0 = now();
        let req = c.mount(t0, NOW_MS).unwrap();
        c.complete(result_for(&req, Err(transport_error())));

        let retry = c.refresh(t0, NOW_MS).unwrap();
        c.complete(result_for(&retry, Ok(records(2))));
        assert_eq!(c.records().len(), 2);
        assert_eq!(c.error_message(), None);
    }

    #[test]
    fn error_banner_stays_up_while_retry_is_in_flight() {
        let mut c = controller();
        let t0 = now();
        let req = c.mount(t0, NOW_MS).unwrap();
        c.complete(result_for(&req, Ok(Vec::new())));

        let retry = c.refresh(t0, NOW_MS).unwrap();
        assert!(c.is_loading());
        assert_eq!(
            c.error_message().as_deref(),
            Some("No data available for the selected time range")
        );

        // Resolving with a different failure replaces the message
        c.complete(result_for(&retry, Err(transport_error())));
        assert_eq!(c.error_message().as_deref(), Some("Failed to fetch data"));
    }

    #[test]
    fn selecting_interval_closes_menu_and_starts_exactly_one_cycle() {
        let mut c = controller();
        let t0 = now();
        let first = c.mount(t0, NOW_MS).unwrap();
        c.complete(result_for(&first, Ok(records(1))));

        c.toggle_menu();
        assert!(c.is_menu_open());

        let req = c
            .select_interval(Interval::FifteenMinutes, t0, NOW_MS + 10)
            .expect("a new interval starts a cycle");
        assert!(!c.is_menu_open());
        assert_eq!(req.interval, Interval::FifteenMinutes);
        assert_eq!(req.trigger, Trigger::IntervalChanged);
        assert_eq!(c.interval(), Interval::FifteenMinutes);

        // Re-picking the same value only closes the menu
        c.toggle_menu();
        assert!(c.select_interval(Interval::FifteenMinutes, t0, NOW_MS).is_none());
        assert!(!c.is_menu_open());
    }

    #[test]
    fn interval_change_supersedes_in_flight_cycle() {
        let mut c = controller();
        let t0 = now();
        let stale = c.mount(t0, NOW_MS).unwrap();
        let fresh = c.select_interval(Interval::OneHour, t0, NOW_MS).unwrap();
        assert!(fresh.generation > stale.generation);

        // The superseded cycle resolves late and must not win
        assert!(!c.complete(result_for(&stale, Ok(records(9)))));
        assert!(c.is_loading());

        assert!(c.complete(result_for(&fresh, Ok(records(2)))));
        match c.state() {
            LoadState::Ready(series) => {
                assert_eq!(series.interval, Interval::OneHour);
                assert_eq!(series.records.len(), 2);
            }
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn timer_fires_after_period_and_is_coalesced_while_loading() {
        let mut c = controller();
        let t0 = now();
        let first = c.mount(t0, NOW_MS).unwrap();

        // Still loading when the minute elapses: no second cycle
        let t1 = t0 + Duration::from_secs(60);
        assert!(c.poll_timer(t1, NOW_MS + 60_000).is_none());
        assert!(c.complete(result_for(&first, Ok(records(1)))));

        // Deadline was re-armed from t1
        assert!(c.poll_timer(t1 + Duration::from_secs(30), NOW_MS).is_none());
        let tick = c
            .poll_timer(t1 + Duration::from_secs(60), NOW_MS + 120_000)
            .expect("timer should fire once idle");
        assert_eq!(tick.trigger, Trigger::Timer);
        assert_eq!(tick.window.end_ms, NOW_MS + 120_000);
        assert_eq!(tick.window.start_ms, NOW_MS + 120_000 - HOUR_MS);
    }

    #[test]
    fn manual_refresh_is_disabled_while_loading() {
        let mut c = controller();
        c.mount(now(), NOW_MS).unwrap();
        assert!(c.refresh(now(), NOW_MS).is_none());
    }

    #[test]
    fn unmount_cancels_timer_and_orphans_in_flight_cycle() {
        let mut c = controller();
        let t0 = now();
        let req = c.mount(t0, NOW_MS).unwrap();

        c.unmount();
        assert!(!c.is_mounted());
        assert!(c.poll_timer(t0 + Duration::from_secs(3_600), NOW_MS).is_none());
        assert!(!c.complete(result_for(&req, Ok(records(1)))));
        assert_eq!(c.state(), &LoadState::Idle);

        // Mounting again starts over
        assert!(c.mount(t0, NOW_MS).is_some());
    }
}
