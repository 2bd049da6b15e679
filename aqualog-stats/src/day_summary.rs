use aqualog_core::bucket;
use aqualog_core::record::IntakeRecord;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One calendar day's slice of the history: the day, its total intake in
/// base units, and the member records in chronological order. Computed
/// fresh on every query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total: f64,
    pub records: Vec<IntakeRecord>,
}

/// Summarize a single local calendar day using the half-open day bucket.
pub fn day_summary(records: &[IntakeRecord], day: NaiveDate) -> DaySummary {
    let mut members: Vec<IntakeRecord> = records
        .iter()
        .filter(|r| bucket::in_day(r.timestamp, day))
        .cloned()
        .collect();
    members.sort_by_key(|r| r.timestamp);
    let total = members.iter().map(|r| r.amount).sum();
    DaySummary {
        date: day,
        total,
        records: members,
    }
}

/// Total intake for the day containing `now`. Empty history yields 0.
pub fn today_total(records: &[IntakeRecord], now: NaiveDateTime) -> f64 {
    day_summary(records, now.date()).total
}

#[cfg(test)]
mod tests {
    use super::{day_summary, today_total};
    use aqualog_core::drink::DrinkType;
    use aqualog_core::record::IntakeRecord;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_today_total_empty() {
        assert_eq!(today_total(&[], at(14, 12)), 0.0);
    }

    #[test]
    fn test_today_total_single_record() {
        let records = vec![IntakeRecord::new(at(14, 9), 45.0, DrinkType::Water)];
        assert_eq!(today_total(&records, at(14, 18)), 45.0);
    }

    #[test]
    fn test_today_total_ignores_other_days() {
        let records = vec![
            IntakeRecord::new(at(13, 9), 20.0, DrinkType::Water),
            IntakeRecord::new(at(14, 9), 45.0, DrinkType::Water),
            IntakeRecord::new(at(15, 9), 30.0, DrinkType::Water),
        ];
        assert_eq!(today_total(&records, at(14, 18)), 45.0);
    }

    #[test]
    fn test_midnight_record_counts_toward_later_day() {
        let records = vec![IntakeRecord::new(at(15, 0), 8.0, DrinkType::Tea)];
        assert_eq!(today_total(&records, at(14, 23)), 0.0);
        assert_eq!(today_total(&records, at(15, 1)), 8.0);
    }

    #[test]
    fn test_day_summary_sorted_members() {
        let records = vec![
            IntakeRecord::new(at(14, 18), 10.0, DrinkType::Juice),
            IntakeRecord::new(at(14, 9), 25.0, DrinkType::Water),
            IntakeRecord::new(at(13, 9), 99.0, DrinkType::Water),
        ];
        let summary = day_summary(&records, NaiveDate::from_ymd_opt(2023, 12, 14).unwrap());
        assert_eq!(summary.total, 35.0);
        assert_eq!(summary.records.len(), 2);
        assert!(summary.records[0].timestamp < summary.records[1].timestamp);
    }
}
