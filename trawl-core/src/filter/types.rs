use crate::record::LogRecord;
use std::fmt;

/// The field a [`FilterSpec`] constrains. A run holds at most one spec per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKind {
    Hostname,
    ClientIp,
    UserId,
    Method,
    Path,
    Status,
    DateTimePrefix,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::Hostname => "hostname",
            FilterKind::ClientIp => "client IP",
            FilterKind::UserId => "user id",
            FilterKind::Method => "method",
            FilterKind::Path => "path",
            FilterKind::Status => "status",
            FilterKind::DateTimePrefix => "date/time",
        };
        f.write_str(name)
    }
}

/// A compiled predicate over one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Status(u16),
    /// Leading digit of a hundred-block, `4` for `4xx`.
    StatusClass(u16),
    UserId(u64),
    ClientIp(String),
    /// Upper-cased method name.
    Method(String),
    /// Compared against [`LogRecord::date_time`].
    DateTimePrefix(String),
    /// Whole application-tier hostname.
    HostLabel(String),
    /// Gateway hostname starting with `"<label>."`.
    HostSubdomain(String),
    /// Whole gateway hostname, lower-cased.
    HostExact(String),
    Path(String),
}

impl Matcher {
    pub fn matches(&self, record: &LogRecord) -> bool {
        match self {
            Matcher::Status(status) => record.status == *status,
            Matcher::StatusClass(class) => record.status / 100 == *class,
            Matcher::UserId(id) => record.user_id == Some(*id),
            Matcher::ClientIp(ip) => record.client == *ip,
            Matcher::Method(method) => record.method.to_ascii_uppercase() == *method,
            Matcher::DateTimePrefix(prefix) => record.date_time().starts_with(prefix.as_str()),
            Matcher::HostLabel(label) => record.hostname == *label,
            Matcher::HostSubdomain(label) => record
                .hostname
                .strip_prefix(label.as_str())
                .is_some_and(|rest| rest.starts_with('.')),
            Matcher::HostExact(host) => record.hostname.eq_ignore_ascii_case(host),
            Matcher::Path(path) => record.path == *path,
        }
    }

    /// A lower-cased literal that any line this matcher accepts must contain.
    pub fn needle(&self) -> Option<String> {
        let literal = match self {
            Matcher::Status(status) => status.to_string(),
            Matcher::StatusClass(_) => return None,
            Matcher::UserId(id) => id.to_string(),
            Matcher::ClientIp(ip) => ip.clone(),
            Matcher::Method(method) => method.clone(),
            Matcher::DateTimePrefix(prefix) => prefix.clone(),
            Matcher::HostLabel(label) => label.clone(),
            Matcher::HostSubdomain(label) => format!("{label}."),
            Matcher::HostExact(host) => host.clone(),
            Matcher::Path(path) => path.clone(),
        };
        (!literal.is_empty()).then(|| literal.to_ascii_lowercase())
    }
}

/// One classified filter term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub kind: FilterKind,
    pub matcher: Matcher,
    /// The term as the operator typed it.
    pub token: String,
}

impl FilterSpec {
    pub fn new(kind: FilterKind, matcher: Matcher, token: &str) -> Self {
        Self {
            kind,
            matcher,
            token: token.to_string(),
        }
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        self.matcher.matches(record)
    }
}
