//! Aggregation and statistics engine over intake records.
//!
//! Every function here is a pure computation over an explicit record
//! snapshot: no cache, no shared state, no I/O. Callers pass the goal and
//! display unit as parameters; results are computed in the base unit and
//! converted only at the reporting boundary.

pub mod day_summary;
pub mod history;
pub mod report;
