//! CSV adapters for the intake history.
//!
//! History files are headerless rows:
//! `timestamp(YYYYMMDD HHMMSS),amount_oz,drink,note`
//!
//! The note column may be empty. Malformed rows are skipped with a
//! warning rather than failing the whole load.
//!
//! # Example
//! ```text
//! 20231214 090000,45,tea,
//! 20231214 123000,25,water,after run
//! ```

use crate::HistoryStore;
use aqualog_core::record::IntakeRecord;
use aqualog_utils::dates;

impl HistoryStore {
    /// Parse a history CSV string into a store. Rows that do not parse are
    /// skipped and logged.
    pub fn from_csv(data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes());

        let mut records = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let row = result?;

            let timestamp = row
                .get(0)
                .and_then(|s| dates::parse_timestamp(s.trim()).ok());
            let amount = row.get(1).and_then(|s| s.trim().parse::<f64>().ok());
            let drink = row.get(2).and_then(|s| s.trim().parse().ok());

            let (Some(timestamp), Some(amount), Some(drink)) = (timestamp, amount, drink) else {
                skipped += 1;
                continue;
            };

            let note = row
                .get(3)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            records.push(IntakeRecord {
                timestamp,
                amount: aqualog_core::units::sanitize_amount(amount),
                drink,
                note,
            });
        }

        if skipped > 0 {
            log::warn!("history: skipped {skipped} malformed rows");
        }
        log::info!("history: loaded {} records", records.len());
        Ok(Self::from_records(records))
    }

    /// Serialize the history back to the CSV format `from_csv` reads.
    pub fn to_csv(&self) -> anyhow::Result<String> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        for record in self.records() {
            wtr.write_record([
                dates::format_timestamp(&record.timestamp),
                record.amount.to_string(),
                record.drink.to_string(),
                record.note.clone().unwrap_or_default(),
            ])?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::HistoryStore;
    use aqualog_core::drink::DrinkType;

    const HISTORY_CSV: &str = "\
20231214 090000,45,tea,
20231214 123000,25,water,after run
20231213 195000,12,Boba,
";

    #[test]
    fn test_from_csv() {
        let store = HistoryStore::from_csv(HISTORY_CSV).unwrap();
        assert_eq!(store.len(), 3);
        // sorted chronologically, so the boba tea row comes first
        assert_eq!(store.records()[0].drink, DrinkType::BobaTea);
        assert_eq!(store.records()[2].amount, 25.0);
        assert_eq!(store.records()[2].note.as_deref(), Some("after run"));
        assert_eq!(store.records()[1].note, None);
    }

    #[test]
    fn test_from_csv_skips_malformed_rows() {
        let data = "\
not-a-date,45,tea,
20231214 090000,forty-five,tea,
20231214 090000,45,kombucha,
20231214 093000,8,water,
";
        let store = HistoryStore::from_csv(data).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].drink, DrinkType::Water);
    }

    #[test]
    fn test_csv_round_trip() {
        let store = HistoryStore::from_csv(HISTORY_CSV).unwrap();
        let rewritten = store.to_csv().unwrap();
        let reloaded = HistoryStore::from_csv(&rewritten).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_empty_input() {
        let store = HistoryStore::from_csv("").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.to_csv().unwrap(), "");
    }
}
