use crate::history;
use aqualog_core::drink::DrinkType;
use aqualog_core::goal::DailyGoal;
use aqualog_core::record::IntakeRecord;
use aqualog_core::units::{self, FluidUnit};
use serde::Serialize;

/// The unit-aware reporting boundary for the history statistics.
///
/// Statistics are computed in base units and converted to the requested
/// display unit here, then rounded to whole numbers — rounding always
/// happens after conversion so the error is not compounded. `None` fields
/// mean the underlying statistic had no qualifying data; how that is
/// rendered is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryReport {
    pub unit: FluidUnit,
    /// Mean intake volume per day, in display units.
    pub daily_average: Option<u64>,
    /// Mean number of drinks logged per day.
    pub daily_frequency: Option<u64>,
    /// Mean goal completion across days, 0..=100.
    pub completion_percent: Option<u64>,
    /// Every drink type with its record count, ranked.
    pub top_drinks: Vec<(DrinkType, usize)>,
}

impl HistoryReport {
    pub fn compute(records: &[IntakeRecord], goal: DailyGoal, unit: FluidUnit) -> Self {
        let daily_average = history::daily_average(records)
            .ok()
            .map(|oz| units::to_display(oz, unit).round() as u64);
        let daily_frequency = history::daily_frequency(records)
            .ok()
            .map(|count| count.round() as u64);
        let completion_percent = history::daily_completion(records, goal)
            .ok()
            .map(|percent| percent.round() as u64);
        Self {
            unit,
            daily_average,
            daily_frequency,
            completion_percent,
            top_drinks: history::top_drinks(records),
        }
    }
}
