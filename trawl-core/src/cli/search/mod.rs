//! Request Search Pipeline
//!
//! Reads the selected log rotations oldest first and prints every request
//! that satisfies all search terms.
//!
//! Each line first goes through a cheap substring check, so most of a large
//! log is never parsed. Lines that survive are parsed with the grammar for the
//! active tier, checked against the structural filters and the path category
//! toggles, and then rendered.
//!
//! Two optional passes ride along on accepted records:
//! - **Timeline**: reports the idle gap (or overlap) before each request
//! - **Stats**: collects durations and prints percentiles once the pass ends
//!
//! The overall data processing architecture is:
//!
//! discover / open_log
//! FilterEngine::prefilter
//! parse_line
//! LogRecord
//! FilterEngine::accepts
//! TimelineTracker / DurationAggregator
//! render_record / render_stats
//! OutputSink

mod args;
mod constants;
mod render;
mod run;
mod sink;
mod stats_aggregation;
mod timeline;

pub use args::SearchArgs;
pub use constants::{LARGE_GAP_MS, MEDIUM_GAP_MS, PERCENTILES};
pub use render::{RenderOptions, render_gap, render_record, render_stats, status_indicator};
pub use run::{SearchOutcome, SearchPlan, execute, plan_search, run_search};
pub use sink::OutputSink;
pub use stats_aggregation::{DurationAggregator, DurationSummary, percentile};
pub use timeline::{GapReport, TimelineTracker};

#[cfg(test)]
mod tests;
