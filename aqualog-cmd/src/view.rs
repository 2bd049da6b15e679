//! Read-only subcommands: statistics, chart series, and day summaries.

use crate::history::load_history;
use crate::Timeframe;
use aqualog_chart::series;
use aqualog_core::goal::DailyGoal;
use aqualog_core::units::{self, FluidUnit};
use aqualog_stats::day_summary::{day_summary, today_total};
use aqualog_stats::report::HistoryReport;
use aqualog_store::RecordStore;
use aqualog_utils::dates;
use chrono::{Local, NaiveDate};

/// Placeholder printed where a statistic has no qualifying data.
const NO_DATA: &str = "- -";

pub fn run_stats(history_csv: &str, unit: FluidUnit, goal: f64) -> anyhow::Result<()> {
    let goal_oz = units::to_base(goal, unit);
    let Some(goal) = DailyGoal::new(goal_oz) else {
        anyhow::bail!("daily goal must be a positive amount");
    };

    let store = load_history(history_csv)?;
    let records = store.snapshot();
    let now = Local::now().naive_local();

    let today = units::to_display(today_total(&records, now), unit).round();
    let report = HistoryReport::compute(&records, goal, unit);

    println!("Today's intake: {today} {unit}");
    match report.daily_average {
        Some(v) => println!("Daily average:  {v} {unit}/day"),
        None => println!("Daily average:  {NO_DATA}"),
    }
    match report.daily_frequency {
        Some(v) => println!("Frequency:      {v} times/day"),
        None => println!("Frequency:      {NO_DATA}"),
    }
    match report.completion_percent {
        Some(v) => println!("Goal completed: {v}%"),
        None => println!("Goal completed: {NO_DATA}"),
    }

    println!("Top drinks:");
    let logged: Vec<_> = report
        .top_drinks
        .iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    if logged.is_empty() {
        println!("  {NO_DATA}");
    } else {
        for (drink, count) in logged {
            println!("  {} {} - {}", drink.emoji(), drink, count);
        }
    }
    Ok(())
}

pub fn run_chart(
    history_csv: &str,
    timeframe: Timeframe,
    unit: FluidUnit,
    day: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let store = load_history(history_csv)?;
    let records = store.snapshot();
    let reference_day = day.unwrap_or_else(|| Local::now().naive_local().date());

    let points = match timeframe {
        Timeframe::Hourly => series::hourly_series(&records, reference_day, unit),
        Timeframe::Daily => series::default_daily_series(&records, reference_day, unit),
    };

    println!(
        "{} intake for {} (unit - {unit})",
        match timeframe {
            Timeframe::Hourly => "Hourly",
            Timeframe::Daily => "Daily",
        },
        dates::format_date(&reference_day)
    );
    for point in points {
        println!("{:>6}  {:.1}", point.label, point.value);
    }
    Ok(())
}

pub fn run_day(history_csv: &str, date: NaiveDate) -> anyhow::Result<()> {
    let store = load_history(history_csv)?;
    let summary = day_summary(&store.snapshot(), date);

    println!(
        "{}: {} records, {} oz total",
        dates::format_date(&summary.date),
        summary.records.len(),
        summary.total
    );
    for record in &summary.records {
        let note = record
            .note
            .as_deref()
            .map(|n| format!(" ({n})"))
            .unwrap_or_default();
        println!(
            "  {}  {} oz {} {}{note}",
            dates::hour_label_of(&record.timestamp),
            record.amount,
            record.drink,
            record.drink.emoji()
        );
    }
    Ok(())
}
