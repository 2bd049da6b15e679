//! Shared utility functions for aqualog crates.

/// Date and time parse/format helpers
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime, Timelike};

    /// Compact timestamp format used in history CSV files: "YYYYMMDD HHMMSS"
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d %H%M%S";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Format a timestamp in the compact history-file format
    pub fn format_timestamp(ts: &NaiveDateTime) -> String {
        ts.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a timestamp string in the compact history-file format
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        Ok(NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?)
    }

    /// 12-hour clock label for an hour of the day: 0 -> "12 AM", 9 -> "9 AM",
    /// 13 -> "1 PM". `hour` must be 0..=23.
    pub fn hour_label(hour: u32) -> String {
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let clock_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{clock_hour} {meridiem}")
    }

    /// Label a timestamp with its 12-hour clock hour, e.g. "9 AM".
    pub fn hour_label_of(ts: &NaiveDateTime) -> String {
        hour_label(ts.hour())
    }

    /// Short chart label for a date: "MM/DD"
    pub fn month_day_label(date: &NaiveDate) -> String {
        date.format("%m/%d").to_string()
    }

}
