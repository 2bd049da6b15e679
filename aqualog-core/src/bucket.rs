//! Time-bucketing rules shared by the statistics engine and the chart
//! series builders.
//!
//! Day buckets are half-open local intervals [00:00:00, 24:00:00): a
//! record at exactly midnight belongs to the later day. Hour buckets keep
//! the history chart's closed interval [hour:00:00, hour:59:59].

use chrono::{NaiveDate, NaiveDateTime};

/// Start of the half-open interval covering `day`.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(0, 0, 0).unwrap()
}

/// True if `ts` falls within the half-open local interval of `day`.
pub fn in_day(ts: NaiveDateTime, day: NaiveDate) -> bool {
    ts.date() == day
}

/// Closed interval [hour:00:00, hour:59:59] of the given hour on `day`.
/// `hour` must be 0..=23.
pub fn hour_interval(day: NaiveDate, hour: u32) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_hms_opt(hour, 0, 0).unwrap();
    let end = day.and_hms_opt(hour, 59, 59).unwrap();
    (start, end)
}

/// True if `ts` falls within the closed hour interval.
pub fn in_hour(ts: NaiveDateTime, day: NaiveDate, hour: u32) -> bool {
    let (start, end) = hour_interval(day, hour);
    start <= ts && ts <= end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 14).unwrap()
    }

    #[test]
    fn test_day_is_half_open() {
        let midnight = day_start(day());
        assert!(in_day(midnight, day()));

        let next_midnight = day_start(day().succ_opt().unwrap());
        assert!(!in_day(next_midnight, day()));
        assert!(in_day(next_midnight, day().succ_opt().unwrap()));

        let last_second = day().and_hms_opt(23, 59, 59).unwrap();
        assert!(in_day(last_second, day()));
    }

    #[test]
    fn test_hour_interval_is_closed() {
        let (start, end) = hour_interval(day(), 9);
        assert_eq!(start, day().and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(end, day().and_hms_opt(9, 59, 59).unwrap());

        assert!(in_hour(start, day(), 9));
        assert!(in_hour(end, day(), 9));
        assert!(!in_hour(day().and_hms_opt(10, 0, 0).unwrap(), day(), 9));
    }

    #[test]
    fn test_hour_interval_other_day() {
        let other = day().succ_opt().unwrap();
        assert!(!in_hour(other.and_hms_opt(9, 30, 0).unwrap(), day(), 9));
    }
}
