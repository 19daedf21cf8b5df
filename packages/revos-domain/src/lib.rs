pub mod fallback;
pub mod task;
pub mod time_serde;
pub mod triage;
pub mod windows;

/// Rows included per category when sampling for the planner context.
pub const SAMPLE_ROWS: usize = 5;
/// Rows kept per derived highlight subset.
pub const HIGHLIGHT_ROWS: usize = 10;
