//! The user-facing mutation paths: thin command handlers that append one
//! record to the history. Widgets and intents call these and nothing else;
//! all derived views are recomputed from the snapshot afterwards.

use crate::HistoryStore;
use aqualog_core::drink::DrinkType;
use aqualog_core::record::IntakeRecord;
use aqualog_core::units::sanitize_amount;
use chrono::NaiveDateTime;

/// The fixed "add glass" serving logged by the widget, in oz.
pub const WIDGET_GLASS_OZ: f64 = 8.0;

/// Log a drink from the slider-driven submit flow. The amount arrives in
/// base units, is sanitized, and is truncated to a whole number of ounces
/// the way the submit flow always has.
pub fn submit_drink(
    store: &mut HistoryStore,
    amount_oz: f64,
    drink: DrinkType,
    note: Option<String>,
    now: NaiveDateTime,
) -> IntakeRecord {
    let exact_amount = sanitize_amount(amount_oz).trunc();
    let record = IntakeRecord {
        timestamp: now,
        amount: exact_amount,
        drink,
        note,
    };
    store.append(record.clone());
    log::info!("logged {} oz of {}", record.amount, record.drink);
    record
}

/// Log the widget's fixed glass of the given drink type.
pub fn submit_glass(store: &mut HistoryStore, drink: DrinkType, now: NaiveDateTime) -> IntakeRecord {
    let record = IntakeRecord::new(now, WIDGET_GLASS_OZ, drink);
    store.append(record.clone());
    log::info!("logged a glass of {}", record.drink);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, 14)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_submit_drink_truncates_to_whole_ounces() {
        let mut store = HistoryStore::new();
        let record = submit_drink(&mut store, 45.9, DrinkType::Tea, None, now());
        assert_eq!(record.amount, 45.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_submit_drink_sanitizes_bad_amounts() {
        let mut store = HistoryStore::new();
        assert_eq!(
            submit_drink(&mut store, f64::NAN, DrinkType::Water, None, now()).amount,
            0.0
        );
        assert_eq!(
            submit_drink(&mut store, -12.0, DrinkType::Water, None, now()).amount,
            0.0
        );
    }

    #[test]
    fn test_submit_glass_is_eight_ounces() {
        let mut store = HistoryStore::new();
        let record = submit_glass(&mut store, DrinkType::Water, now());
        assert_eq!(record.amount, WIDGET_GLASS_OZ);
        assert_eq!(store.latest().unwrap().drink, DrinkType::Water);
    }

    #[test]
    fn test_submit_keeps_note() {
        let mut store = HistoryStore::new();
        let record = submit_drink(
            &mut store,
            16.0,
            DrinkType::Coffee,
            Some("oat latte".into()),
            now(),
        );
        assert_eq!(record.note.as_deref(), Some("oat latte"));
    }
}
