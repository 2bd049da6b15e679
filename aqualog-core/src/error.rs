use std::fmt;

/// Errors the statistics engine can signal. There is exactly one: a ratio
/// statistic (average, frequency, completion) was asked for with no
/// qualifying day to compute it from. Callers render it however they like;
/// the engine never formats user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    NoData,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::NoData => f.write_str("no qualifying intake data"),
        }
    }
}

impl std::error::Error for StatsError {}
