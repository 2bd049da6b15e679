//! Record store interface, in-memory history, and CSV adapters.
//!
//! The engine never talks to storage directly: it takes plain value
//! snapshots. `RecordStore` is that seam — any persistence technology that
//! can hand over a `Vec<IntakeRecord>` plugs in. `HistoryStore` is the
//! in-memory implementation backing the CLI, with CSV load/save adapters
//! in [`loader`] and the user-facing mutation paths in [`commands`].

pub mod commands;
pub mod loader;

use aqualog_core::record::IntakeRecord;

/// Abstract read interface over a chronological set of intake records.
/// A snapshot is a single point-in-time view; the caller owns it and the
/// store holds no reference to it afterwards.
pub trait RecordStore {
    fn snapshot(&self) -> Vec<IntakeRecord>;
}

/// In-memory intake history, kept in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    records: Vec<IntakeRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(mut records: Vec<IntakeRecord>) -> Self {
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    /// Append a record, keeping chronological order.
    pub fn append(&mut self, record: IntakeRecord) {
        let idx = self
            .records
            .partition_point(|r| r.timestamp <= record.timestamp);
        self.records.insert(idx, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[IntakeRecord] {
        &self.records
    }

    /// The most recently logged drink, if any.
    pub fn latest(&self) -> Option<&IntakeRecord> {
        self.records.last()
    }
}

impl RecordStore for HistoryStore {
    fn snapshot(&self) -> Vec<IntakeRecord> {
        self.records.clone()
    }
}
