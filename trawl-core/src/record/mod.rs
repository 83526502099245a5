//! Request log line grammars.
//!
//! Two tiers write request logs in two different shapes. Each shape has its
//! own [`LineParser`] so they can be exercised against literal lines in
//! isolation; [`parse_line`] picks one by [`FormatMode`].

mod app;
mod date;
mod duration;
mod gateway;
mod types;


pub use app::AppLineParser;
pub use date::{gateway_to_iso_date, iso_to_gateway_date, month_abbrev, month_number};
pub use duration::parse_duration_ms;
pub use gateway::GatewayLineParser;
pub use types::{FormatMode, LogRecord};

/// Parse one candidate line into a record, or `None` when the line does not
/// follow the grammar.
pub trait LineParser {
    fn parse(&self, line: &str) -> Option<LogRecord>;
}

pub fn parse_line(line: &str, mode: FormatMode) -> Option<LogRecord> {
    match mode {
        FormatMode::ApplicationLog => AppLineParser.parse(line),
        FormatMode::GatewayLog => GatewayLineParser.parse(line),
    }
}

pub(crate) fn split_query(full_path: &str) -> &str {
    full_path
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(full_path)
}

pub(crate) fn valid_status(raw: &str) -> Option<u16> {
    raw.parse::<u16>()
        .ok()
        .filter(|status| (100..=599).contains(status))
}
