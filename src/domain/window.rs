/// Closed request window `[start_ms, end_ms]` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl FetchWindow {
    /// A window of `width_ms` that ends exactly at `end_ms`.
    pub fn trailing(end_ms: i64, width_ms: i64) -> Self {
        Self {
            start_ms: end_ms - width_ms,
            end_ms,
        }
    }

    pub fn width_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_window_ends_at_call_time() {
        let w = FetchWindow::trailing(1_700_000_000_000, 3_600_000);
        assert_eq!(w.end_ms, 1_700_000_000_000);
        assert_eq!(w.start_ms, 1_700_000_000_000 - 3_600_000);
        assert_eq!(w.width_ms(), 3_600_000);
    }
}
