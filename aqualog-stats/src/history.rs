//! History-wide ratio statistics and the top-drink ranking.
//!
//! All four statistics share one partition: records grouped by local
//! calendar day, keeping only days with at least one positive-amount
//! record ("qualifying" days). Days are weighted equally regardless of how
//! many drinks were logged on them.

use aqualog_core::drink::DrinkType;
use aqualog_core::error::StatsError;
use aqualog_core::goal::DailyGoal;
use aqualog_core::record::IntakeRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group records by day and keep the days with any positive intake.
/// Zero-amount records stay in their day's group once the day qualifies;
/// each statistic decides whether they count.
fn qualifying_days(records: &[IntakeRecord]) -> BTreeMap<NaiveDate, Vec<&IntakeRecord>> {
    let mut days: BTreeMap<NaiveDate, Vec<&IntakeRecord>> = BTreeMap::new();
    for record in records {
        days.entry(record.day()).or_default().push(record);
    }
    days.retain(|_, members| members.iter().any(|r| r.amount > 0.0));
    days
}

/// Average intake volume per day, in base units.
///
/// Two-level mean: each qualifying day contributes the mean amount of its
/// positive-amount records, and the result is the mean of those per-day
/// means. A day with thirty sips counts no more than a day with one.
pub fn daily_average(records: &[IntakeRecord]) -> Result<f64, StatsError> {
    let days = qualifying_days(records);
    if days.is_empty() {
        return Err(StatsError::NoData);
    }
    let day_means: Vec<f64> = days
        .values()
        .map(|members| {
            let amounts: Vec<f64> = members
                .iter()
                .filter(|r| r.amount > 0.0)
                .map(|r| r.amount)
                .collect();
            // non-empty by construction: the day qualified
            amounts.iter().sum::<f64>() / amounts.len() as f64
        })
        .collect();
    Ok(day_means.iter().sum::<f64>() / day_means.len() as f64)
}

/// Mean number of drinks logged per qualifying day. Counts events, so
/// zero-amount records are included.
pub fn daily_frequency(records: &[IntakeRecord]) -> Result<f64, StatsError> {
    let days = qualifying_days(records);
    if days.is_empty() {
        return Err(StatsError::NoData);
    }
    let total_count: usize = days.values().map(|members| members.len()).sum();
    Ok(total_count as f64 / days.len() as f64)
}

/// Mean goal completion across qualifying days, as a percentage in
/// [0, 100]. Each day's ratio is capped at 1.0 before averaging, so one
/// over-goal day cannot offset poor days beyond 100%.
pub fn daily_completion(records: &[IntakeRecord], goal: DailyGoal) -> Result<f64, StatsError> {
    let days = qualifying_days(records);
    if days.is_empty() {
        return Err(StatsError::NoData);
    }
    let ratio_sum: f64 = days
        .values()
        .map(|members| {
            let day_total: f64 = members.iter().map(|r| r.amount).sum();
            (day_total / goal.oz()).min(1.0)
        })
        .sum();
    Ok(ratio_sum / days.len() as f64 * 100.0)
}

/// Count records per drink type across qualifying days and rank them by
/// descending count, ties broken by the canonical enumeration order.
/// Every drink type appears in the result, zero counts included.
pub fn top_drinks(records: &[IntakeRecord]) -> Vec<(DrinkType, usize)> {
    let days = qualifying_days(records);
    let mut counts: BTreeMap<DrinkType, usize> =
        DrinkType::ALL.iter().map(|d| (*d, 0)).collect();
    for members in days.values() {
        for record in members {
            *counts.entry(record.drink).or_default() += 1;
        }
    }
    let mut ranked: Vec<(DrinkType, usize)> = DrinkType::ALL
        .iter()
        .map(|drink| (*drink, counts[drink]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}
