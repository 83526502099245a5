use crate::record::duration::parse_duration_ms;
use crate::record::types::{FormatMode, LogRecord};
use crate::record::{LineParser, split_query, valid_status};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

// 2024-03-07 10:00:00.123 INFO [zr] 10.0.0.1 GET 200 25ms (db: 2ms/1q) /json/messages?x (12@acme via website)
static APP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2}) ",
        r"(?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]+)\s+INFO\s+",
        r"(?:(?:\[(?P<pid>[0-9]+)\]|(?P<bare_pid>[0-9]+))\s+)?",
        r"\[(?P<tag>[^\]]+)\]\s+",
        r"(?P<client>[0-9]{1,3}(?:\.[0-9]{1,3}){3}|[0-9a-fA-F]*:[0-9a-fA-F:.]*)\s+",
        r"(?P<method>[A-Z]+)\s+(?P<status>[0-9]{3})\s+",
        r"(?P<duration>[0-9]+ms|[0-9]+(?:\.[0-9]+)?s)\s+",
        r"(?:\([^)]*\)\s+)*",
        r"(?P<full_path>/\S*)\s+",
        r"\((?P<identity>",
        r"(?P<user_id>[0-9]+)@(?P<user_host>[^\s)]*)",
        r"|unauth@(?P<unauth_host>[^\s)]*)",
        r"|[\w.-]+:[^\s)]+",
        r"|internal",
        r")(?: via (?P<user_agent>.*))?\)$",
    ))
    .expect("application line pattern is valid")
});

/// Request log written by the application tier.
///
/// Only `INFO` request lines match; every other severity or log kind in
/// the same stream is a silent non-match.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppLineParser;

impl LineParser for AppLineParser {
    fn parse(&self, line: &str) -> Option<LogRecord> {
        let caps = APP_LINE.captures(line.trim_end())?;

        let status = valid_status(&caps["status"])?;
        let duration_ms = parse_duration_ms(&caps["duration"])?;

        let date = &caps["date"];
        let time = &caps["time"];
        let timestamp =
            NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S%.f")
                .ok()?;

        let user_id = match caps.name("user_id") {
            Some(id) => Some(id.as_str().parse::<u64>().ok()?),
            None => None,
        };
        let hostname = caps
            .name("user_host")
            .or_else(|| caps.name("unauth_host"))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let full_path = caps["full_path"].to_string();

        Some(LogRecord {
            client: caps["client"].to_string(),
            user_id,
            identity: Some(caps["identity"].to_string()),
            hostname,
            method: caps["method"].to_string(),
            path: split_query(&full_path).to_string(),
            full_path,
            status,
            duration_ms,
            date: date.to_string(),
            time: time.to_string(),
            timestamp,
            user_agent: caps
                .name("user_agent")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            format: FormatMode::ApplicationLog,
        })
    }
}
