//! Capture timestamps in Vietnam local time.
//!
//! Local time is UTC shifted by a fixed seven hours; no timezone database is
//! consulted (Indochina Time has no daylight saving).

use chrono::{DateTime, Duration, Utc};

pub const UTC_OFFSET_HOURS: i64 = 7;
pub const TIMEZONE_LABEL: &str = "Vietnam (GMT+7)";

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Source of the current time, injected so tests can pin it
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Folder date (`DD-MM-YYYY`) and file timestamp (`YYYY-MM-DD_HH-MM-SS`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTime {
    pub date: String,
    pub timestamp: String,
}

impl CaptureTime {
    pub fn from_utc(now: DateTime<Utc>) -> Self {
        let local = now + Duration::hours(UTC_OFFSET_HOURS);
        Self {
            date: local.format(DATE_FORMAT).to_string(),
            timestamp: local.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_offset_applied() {
        let captured = CaptureTime::from_utc(Utc.with_ymd_and_hms(2024, 5, 20, 3, 4, 5).unwrap());

        assert_eq!(captured.date, "20-05-2024");
        assert_eq!(captured.timestamp, "2024-05-20_10-04-05");
    }

    #[test]
    fn test_offset_rolls_over_year_end() {
        let captured = CaptureTime::from_utc(Utc.with_ymd_and_hms(2023, 12, 31, 17, 0, 0).unwrap());

        assert_eq!(captured.date, "01-01-2024");
        assert_eq!(captured.timestamp, "2024-01-01_00-00-00");
    }

    #[test]
    fn test_subsecond_precision_dropped() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(999);

        assert_eq!(CaptureTime::from_utc(now).timestamp, "2024-01-01_07-00-00");
    }
}
