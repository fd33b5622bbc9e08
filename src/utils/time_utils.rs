use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_MIN * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_MIN * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
}

/// Wall-clock "now" in milliseconds since the Unix epoch (UTC).
pub fn utc_now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Converts an epoch timestamp to a UTC datetime.
/// Out-of-range values collapse to the epoch itself rather than failing.
pub fn epoch_ms_to_datetime(epoch_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_ms).unwrap_or_default()
}

/// Used for display purposes (axis labels, cursor readouts)
pub fn format_epoch_ms(epoch_ms: i64, format: &str) -> String {
    epoch_ms_to_datetime(epoch_ms).format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_in_utc() {
        // 2024-01-02 03:04:00 UTC
        let ms = 1_704_164_640_000;
        assert_eq!(format_epoch_ms(ms, "%Y-%m-%d %H:%M"), "2024-01-02 03:04");
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_epoch() {
        assert_eq!(epoch_ms_to_datetime(i64::MAX).timestamp_millis(), 0);
    }
}
