//! Mutation subcommands: append a record and write the history back.

use crate::history::{load_history, save_history};
use aqualog_core::drink::DrinkType;
use aqualog_core::units::{self, FluidUnit};
use aqualog_store::commands;
use chrono::Local;

pub fn run_log(
    history_csv: &str,
    amount: f64,
    drink: DrinkType,
    unit: FluidUnit,
    note: Option<String>,
) -> anyhow::Result<()> {
    let mut store = load_history(history_csv)?;
    let now = Local::now().naive_local();
    let amount_oz = units::to_base(amount, unit);
    let record = commands::submit_drink(&mut store, amount_oz, drink, note, now);
    save_history(history_csv, &store)?;
    println!(
        "Logged {} {} of {} {}",
        units::to_display(record.amount, unit).round(),
        unit,
        record.drink,
        record.drink.emoji()
    );
    Ok(())
}

pub fn run_glass(history_csv: &str, drink: DrinkType) -> anyhow::Result<()> {
    let mut store = load_history(history_csv)?;
    let now = Local::now().naive_local();
    let record = commands::submit_glass(&mut store, drink, now);
    save_history(history_csv, &store)?;
    println!(
        "{}: {} oz of {} {}",
        drink.serving_label(),
        record.amount,
        record.drink,
        record.drink.emoji()
    );
    Ok(())
}
