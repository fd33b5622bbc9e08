use std::time::Duration;

use crate::utils::app_time::AppInstant;

/// The periodic refresh deadline, owned by the controller.
///
/// Nothing ticks in the background: the UI polls `is_due` every frame and
/// asks egui to repaint at `remaining`. Cancelling simply forgets the deadline.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    period: Duration,
    next_due: Option<AppInstant>,
}

impl RefreshSchedule {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// (Re)starts the countdown from `now`.
    pub fn arm(&mut self, now: AppInstant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn is_due(&self, now: AppInstant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Time left before the next tick; `None` when cancelled.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
