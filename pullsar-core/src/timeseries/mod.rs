//! Time-series helpers for chart rendering.

/// Merge named series into date-keyed rows for multi-line charts.
pub mod merge;
