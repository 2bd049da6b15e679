use crate::drink::DrinkType;
use crate::units::sanitize_amount;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single logged drink: an immutable fact of when, how much, and what.
///
/// The timestamp is naive local time, already normalized to the one
/// reference timezone used for day bucketing. The amount is in fluid
/// ounces (the base unit) and is sanitized on construction; records are
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub timestamp: NaiveDateTime,
    pub amount: f64,
    pub drink: DrinkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl IntakeRecord {
    pub fn new(timestamp: NaiveDateTime, amount: f64, drink: DrinkType) -> Self {
        Self {
            timestamp,
            amount: sanitize_amount(amount),
            drink,
            note: None,
        }
    }

    pub fn with_note(
        timestamp: NaiveDateTime,
        amount: f64,
        drink: DrinkType,
        note: impl Into<String>,
    ) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::new(timestamp, amount, drink)
        }
    }

    /// The local calendar day this record belongs to. Day buckets are
    /// half-open, so a record at exactly midnight falls on the later day.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[cfg(test)]
mod tests {
    use super::IntakeRecord;
    use crate::drink::DrinkType;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_new_sanitizes_amount() {
        let ts = at(2023, 12, 14, 9, 0, 0);
        assert_eq!(IntakeRecord::new(ts, f64::NAN, DrinkType::Water).amount, 0.0);
        assert_eq!(IntakeRecord::new(ts, -5.0, DrinkType::Water).amount, 0.0);
        assert_eq!(IntakeRecord::new(ts, 45.0, DrinkType::Water).amount, 45.0);
    }

    #[test]
    fn test_midnight_belongs_to_later_day() {
        let midnight = at(2023, 12, 15, 0, 0, 0);
        let record = IntakeRecord::new(midnight, 8.0, DrinkType::Tea);
        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
    }

    #[test]
    fn test_note_round_trips_through_json() {
        let record = IntakeRecord::with_note(
            at(2023, 12, 14, 12, 30, 0),
            16.0,
            DrinkType::Coffee,
            "double espresso",
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: IntakeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        // a record without a note omits the field entirely
        let plain = IntakeRecord::new(at(2023, 12, 14, 12, 30, 0), 16.0, DrinkType::Coffee);
        assert!(!serde_json::to_string(&plain).unwrap().contains("note"));
    }
}
