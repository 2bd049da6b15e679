//! Fixed-length chart series builders for intake history.
//!
//! Both builders emit dense, ordered `(label, value)` sequences sized
//! exactly by their window — empty buckets become zero-valued points, so
//! the presentation layer never null-checks. Values are converted to the
//! requested display unit; everything else stays in base units.

pub mod series;
