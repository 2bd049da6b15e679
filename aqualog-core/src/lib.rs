//! Core domain types for hydration intake tracking.
//!
//! Everything downstream (statistics, chart series, stores, CLI) is built
//! on these value types. Amounts are always carried in fluid ounces, the
//! base unit; conversion to the display unit happens at reporting
//! boundaries only. Timestamps are naive local time, normalized before
//! they ever reach this crate.

pub mod bucket;
pub mod date_range;
pub mod drink;
pub mod error;
pub mod goal;
pub mod record;
pub mod units;
