use chrono::NaiveDateTime;
use std::fmt;

/// Which tier produced the log being searched.
///
/// Classification may upgrade `ApplicationLog` to `GatewayLog`; nothing
/// ever moves it the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    ApplicationLog,
    GatewayLog,
}

impl FormatMode {
    /// Upgrade to the gateway format. Returns `true` if the mode changed.
    pub fn upgrade_to_gateway(&mut self) -> bool {
        let changed = *self == FormatMode::ApplicationLog;
        *self = FormatMode::GatewayLog;
        changed
    }

    pub fn is_gateway(self) -> bool {
        self == FormatMode::GatewayLog
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatMode::ApplicationLog => f.write_str("application"),
            FormatMode::GatewayLog => f.write_str("gateway"),
        }
    }
}

/// One parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub client: String,
    pub user_id: Option<u64>,
    /// Raw identity clause (application lines only).
    pub identity: Option<String>,
    /// Empty when the identity clause names no host.
    pub hostname: String,
    pub method: String,
    /// Path without the query string.
    pub path: String,
    pub full_path: String,
    pub status: u16,
    pub duration_ms: u64,
    /// Date as written by the tier (`YYYY-MM-DD` or `DD/Mon/YYYY`).
    pub date: String,
    /// Time as written by the tier.
    pub time: String,
    /// End of the request, timezone dropped.
    pub timestamp: NaiveDateTime,
    pub user_agent: String,
    pub format: FormatMode,
}

impl LogRecord {
    /// The `date`/`time` pair joined the way the tier writes it.
    pub fn date_time(&self) -> String {
        match self.format {
            FormatMode::ApplicationLog => format!("{} {}", self.date, self.time),
            FormatMode::GatewayLog => format!("{}:{}", self.date, self.time),
        }
    }
}
