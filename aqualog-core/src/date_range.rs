use chrono::{Days, NaiveDate, TimeDelta};

/// An inclusive run of calendar days, iterated in chronological order.
/// An inverted range yields nothing.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Build the day window `start_offset..=end_offset` relative to a
    /// reference day, offsets in signed days. This is how the scrollable
    /// history charts address their windows: `from_window(today, -29, 7)`
    /// covers 29 days back through 7 days ahead.
    pub fn from_window(reference: NaiveDate, start_offset: i64, end_offset: i64) -> Self {
        Self(
            shift_days(reference, start_offset),
            shift_days(reference, end_offset),
        )
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        let current = self.0;
        self.0 = current + TimeDelta::days(1);
        Some(current)
    }
}

/// Shift a day by a signed number of days, saturating to the original day
/// at the edges of the representable range.
fn shift_days(day: NaiveDate, offset: i64) -> NaiveDate {
    let shifted = if offset >= 0 {
        day.checked_add_days(Days::new(offset as u64))
    } else {
        day.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(day)
}
