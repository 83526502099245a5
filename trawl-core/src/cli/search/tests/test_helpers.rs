use crate::record::{FormatMode, LogRecord};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_milli_opt(h, m, s, ms)
        .unwrap()
}

pub fn app_record() -> LogRecord {
    LogRecord {
        client: "10.0.0.1".to_string(),
        user_id: Some(12),
        identity: Some("12@acme".to_string()),
        hostname: "acme".to_string(),
        method: "GET".to_string(),
        path: "/json/users".to_string(),
        full_path: "/json/users?client_gravatar=true".to_string(),
        status: 200,
        duration_ms: 25,
        date: "2024-03-07".to_string(),
        time: "10:15:30.123".to_string(),
        timestamp: at(10, 15, 30, 123),
        user_agent: "ZulipMobile/27.1".to_string(),
        format: FormatMode::ApplicationLog,
    }
}

pub fn gateway_record() -> LogRecord {
    LogRecord {
        client: "203.0.113.9".to_string(),
        user_id: None,
        identity: None,
        hostname: "acme.chat.example.com".to_string(),
        method: "GET".to_string(),
        path: "/json/users".to_string(),
        full_path: "/json/users".to_string(),
        status: 200,
        duration_ms: 42,
        date: "07/Mar/2024".to_string(),
        time: "10:15:30".to_string(),
        timestamp: at(10, 15, 30, 0),
        user_agent: "Mozilla/5.0".to_string(),
        format: FormatMode::GatewayLog,
    }
}

/// One application request line.
pub fn app_line(time: &str, user: u64, status: u16, ms: u64, path: &str) -> String {
    format!(
        "2024-03-07 {time} INFO [zr] 10.0.0.1 GET {status} {ms}ms {path} ({user}@acme via ZulipMobile/27.1)"
    )
}

/// One gateway access line.
pub fn gateway_line(time: &str, status: u16, secs: &str, path: &str) -> String {
    format!(
        r#"203.0.113.9 - - [07/Mar/2024:{time} +0000] "GET {path} HTTP/1.1" {status} 512 "-" "Mozilla/5.0" acme.chat.example.com {secs}"#
    )
}

pub fn write_lines(path: &Path, lines: &[String]) {
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(path, body).unwrap();
}

pub fn write_gz_lines(path: &Path, lines: &[String]) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    for line in lines {
        writeln!(encoder, "{line}").unwrap();
    }
    encoder.finish().unwrap();
}
