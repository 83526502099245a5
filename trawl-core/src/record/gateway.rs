use crate::record::date::parse_gateway_date;
use crate::record::duration::parse_duration_ms;
use crate::record::types::{FormatMode, LogRecord};
use crate::record::{LineParser, split_query, valid_status};
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

// client - user [07/Mar/2024:10:00:00 +0000] "GET /path?q HTTP/1.1" 200 512 "referer" "agent" host 0.042
static GATEWAY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<client>\S+) - (?P<user>\S+) ",
        r"\[(?P<date>[0-9]{2}/[A-Z][a-z]{2}/[0-9]{4}):",
        r"(?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2}) [+-][0-9]{4}\] ",
        r#""(?P<method>[A-Za-z]+) (?P<full_path>[^"\s]+) (?P<protocol>HTTP/[^"\s]+)" "#,
        r"(?P<status>[0-9]{3}) (?P<bytes>[0-9]+|-) ",
        r#""(?P<referer>(?:[^"\\]|\\.)*)" "(?P<user_agent>(?:[^"\\]|\\.)*)" "#,
        r"(?P<hostname>\S+) (?P<duration>\S+)$",
    ))
    .expect("gateway line pattern is valid")
});

/// Combined-style access log written by the reverse proxy.
#[derive(Debug, Default, Clone, Copy)]
pub struct GatewayLineParser;

impl LineParser for GatewayLineParser {
    fn parse(&self, line: &str) -> Option<LogRecord> {
        let caps = GATEWAY_LINE.captures(line.trim_end())?;

        let status = valid_status(&caps["status"])?;
        let duration_ms = parse_duration_ms(&caps["duration"])?;

        let date = &caps["date"];
        let time = &caps["time"];
        let timestamp = parse_gateway_date(date)?
            .and_time(NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?);

        let full_path = caps["full_path"].to_string();

        Some(LogRecord {
            client: caps["client"].to_string(),
            user_id: None,
            identity: None,
            hostname: caps["hostname"].to_string(),
            method: caps["method"].to_ascii_uppercase(),
            path: split_query(&full_path).to_string(),
            full_path,
            status,
            duration_ms,
            date: date.to_string(),
            time: time.to_string(),
            timestamp,
            user_agent: caps["user_agent"].to_string(),
            format: FormatMode::GatewayLog,
        })
    }
}
