//! Command implementations for the aqualog CLI.
//!
//! Each subcommand loads the history CSV, runs the pure engine over the
//! snapshot, and either prints results or writes the updated history back.

use aqualog_core::drink::DrinkType;
use aqualog_core::units::FluidUnit;
use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

pub mod history;
pub mod intake;
pub mod view;

/// Which chart series to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    /// 24 hourly buckets of a single day
    Hourly,
    /// The scrollable multi-day window of daily totals
    Daily,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log a drink to the history file
    Log {
        /// Path to the history CSV (created if missing)
        #[arg(short = 'f', long)]
        history_csv: String,

        /// Amount, in the chosen unit
        #[arg(short, long)]
        amount: f64,

        /// Drink type (raw name, e.g. water, coffee, Boba)
        #[arg(short, long, default_value = "water")]
        drink: DrinkType,

        /// Unit the amount is given in
        #[arg(short, long, default_value = "oz")]
        unit: FluidUnit,

        /// Optional free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Log the fixed widget glass of a drink
    Glass {
        /// Path to the history CSV (created if missing)
        #[arg(short = 'f', long)]
        history_csv: String,

        /// Drink type to log a glass of
        #[arg(short, long, default_value = "water")]
        drink: DrinkType,
    },

    /// Print today's total and the history statistics
    Stats {
        /// Path to the history CSV
        #[arg(short = 'f', long)]
        history_csv: String,

        /// Display unit for amounts
        #[arg(short, long, default_value = "oz")]
        unit: FluidUnit,

        /// Daily goal, in the chosen unit
        #[arg(short, long, default_value_t = 100.0)]
        goal: f64,
    },

    /// Print a chart series for a reference day
    Chart {
        /// Path to the history CSV
        #[arg(short = 'f', long)]
        history_csv: String,

        /// Which series to build
        #[arg(short, long, value_enum, default_value = "hourly")]
        timeframe: Timeframe,

        /// Display unit for values
        #[arg(short, long, default_value = "oz")]
        unit: FluidUnit,

        /// Reference day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        day: Option<NaiveDate>,
    },

    /// Print a single day's intake summary
    Day {
        /// Path to the history CSV
        #[arg(short = 'f', long)]
        history_csv: String,

        /// Day to summarize (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Log {
            history_csv,
            amount,
            drink,
            unit,
            note,
        } => intake::run_log(&history_csv, amount, drink, unit, note),
        Command::Glass { history_csv, drink } => intake::run_glass(&history_csv, drink),
        Command::Stats {
            history_csv,
            unit,
            goal,
        } => view::run_stats(&history_csv, unit, goal),
        Command::Chart {
            history_csv,
            timeframe,
            unit,
            day,
        } => view::run_chart(&history_csv, timeframe, unit, day),
        Command::Day { history_csv, date } => view::run_day(&history_csv, date),
    }
}
