use aqualog_core::bucket;
use aqualog_core::date_range::DateRange;
use aqualog_core::record::IntakeRecord;
use aqualog_core::units::{self, FluidUnit};
use aqualog_utils::dates;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of points in an hourly series: one per hour of the day.
pub const HOURS_PER_DAY: u32 = 24;

/// Default daily-series window, in day offsets relative to the reference
/// day: 29 days back through 7 days ahead (37 points).
pub const DEFAULT_DAILY_WINDOW_START: i64 = -29;
pub const DEFAULT_DAILY_WINDOW_END: i64 = 7;

/// One renderable chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Build the 24-point hourly series for a single reference day.
///
/// Each point sums the records inside the closed interval
/// [hour:00:00, hour:59:59], converted to the display unit, labeled with
/// the 12-hour clock hour ("12 AM" .. "11 PM"). Always exactly 24 points.
pub fn hourly_series(records: &[IntakeRecord], day: NaiveDate, unit: FluidUnit) -> Vec<ChartPoint> {
    (0..HOURS_PER_DAY)
        .map(|hour| {
            let total: f64 = records
                .iter()
                .filter(|r| bucket::in_hour(r.timestamp, day, hour))
                .map(|r| units::to_display(r.amount, unit))
                .sum();
            ChartPoint {
                label: dates::hour_label(hour),
                value: total,
            }
        })
        .collect()
}

/// Build a daily series over a window of signed day offsets relative to
/// `reference_day`, chronological, one point per offset in
/// `window_start..=window_end`.
///
/// Each point is that day's total converted to the display unit, labeled
/// "MM/DD". Offsets outside the recorded history yield zero-valued points,
/// never gaps; an inverted window yields an empty series.
pub fn daily_series(
    records: &[IntakeRecord],
    reference_day: NaiveDate,
    window_start: i64,
    window_end: i64,
    unit: FluidUnit,
) -> Vec<ChartPoint> {
    DateRange::from_window(reference_day, window_start, window_end)
        .map(|day| {
            let total: f64 = records
                .iter()
                .filter(|r| bucket::in_day(r.timestamp, day))
                .map(|r| units::to_display(r.amount, unit))
                .sum();
            ChartPoint {
                label: dates::month_day_label(&day),
                value: total,
            }
        })
        .collect()
}

/// Daily series over the default scrollable history window.
pub fn default_daily_series(
    records: &[IntakeRecord],
    reference_day: NaiveDate,
    unit: FluidUnit,
) -> Vec<ChartPoint> {
    daily_series(
        records,
        reference_day,
        DEFAULT_DAILY_WINDOW_START,
        DEFAULT_DAILY_WINDOW_END,
        unit,
    )
}
