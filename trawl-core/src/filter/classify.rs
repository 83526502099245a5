use crate::filter::category::CategoryToggles;
use crate::filter::error::FilterError;
use crate::filter::types::{FilterKind, FilterSpec, Matcher};
use crate::record::{FormatMode, iso_to_gateway_date};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

static STATUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").expect("valid pattern"));
static STATUS_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]xx$").expect("valid pattern"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid pattern"));
static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(?:\.[0-9]{1,3}){3}$").expect("valid pattern"));
static IPV6: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]{0,4}:){1,7}[0-9a-fA-F]{1,4}$").expect("valid pattern")
});
static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})",
        r"(?:[ T](?P<time>[0-9]{2}(?::[0-9]{2}(?::[0-9]{2})?)?))?$",
    ))
    .expect("valid pattern")
});
static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid pattern"));
static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+$").expect("valid pattern")
});

const METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "CONNECT", "TRACE",
];

/// Why classification switched to gateway logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeUpgrade {
    /// The application tier never logs a 502; only the gateway does.
    BadGatewayStatus,
    /// Event queue polls are not written to the application log.
    EventsCategory,
}

impl fmt::Display for ModeUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeUpgrade::BadGatewayStatus => {
                f.write_str("502s only appear in gateway logs; searching gateway logs instead")
            }
            ModeUpgrade::EventsCategory => f.write_str(
                "event queue requests only appear in gateway logs; searching gateway logs instead",
            ),
        }
    }
}

/// Everything classification decided for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub specs: Vec<FilterSpec>,
    pub mode: FormatMode,
    /// An explicit path was given, so category suppression is off.
    pub emit_all: bool,
    pub upgrades: Vec<ModeUpgrade>,
}

impl Classification {
    pub fn has(&self, kind: FilterKind) -> bool {
        self.specs.iter().any(|spec| spec.kind == kind)
    }
}

/// Turns free-form terms into typed filters.
///
/// Rules are tried in a fixed order and the first match wins; each kind may be
/// assigned once per run.
#[derive(Debug)]
pub struct FilterClassifier {
    mode: FormatMode,
    assigned: BTreeMap<FilterKind, String>,
    upgrades: Vec<ModeUpgrade>,
    emit_all: bool,
}

impl FilterClassifier {
    pub fn new(mode: FormatMode) -> Self {
        Self {
            mode,
            assigned: BTreeMap::new(),
            upgrades: Vec::new(),
            emit_all: false,
        }
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn emit_all(&self) -> bool {
        self.emit_all
    }

    pub fn upgrades(&self) -> &[ModeUpgrade] {
        &self.upgrades
    }

    /// Apply the upgrade implied by selecting the events category.
    pub fn select_categories(&mut self, toggles: &CategoryToggles) {
        if toggles.events {
            self.upgrade(ModeUpgrade::EventsCategory);
        }
    }

    /// Classify one term, registering its kind.
    pub fn classify(&mut self, token: &str) -> Result<FilterSpec, FilterError> {
        let spec = self.classify_unchecked(token)?;

        if let Some(existing) = self.assigned.get(&spec.kind) {
            return Err(FilterError::Duplicate {
                kind: spec.kind,
                existing: existing.clone(),
                token: token.to_string(),
            });
        }
        self.assigned.insert(spec.kind, token.to_string());

        if spec.kind == FilterKind::Path {
            self.emit_all = true;
        }

        Ok(spec)
    }

    fn classify_unchecked(&mut self, token: &str) -> Result<FilterSpec, FilterError> {
        if STATUS.is_match(token) {
            let status: u16 = token.parse().unwrap_or(0);
            if (100..=599).contains(&status) {
                if status == 502 {
                    self.upgrade(ModeUpgrade::BadGatewayStatus);
                }
                return Ok(FilterSpec::new(
                    FilterKind::Status,
                    Matcher::Status(status),
                    token,
                ));
            }
        }

        if STATUS_CLASS.is_match(token) {
            let class = u16::from(token.as_bytes()[0] - b'0');
            return Ok(FilterSpec::new(
                FilterKind::Status,
                Matcher::StatusClass(class),
                token,
            ));
        }

        if DIGITS.is_match(token) {
            if self.mode.is_gateway() {
                return Err(FilterError::UserIdInGatewayMode {
                    token: token.to_string(),
                });
            }
            let id = token
                .parse::<u64>()
                .map_err(|_| FilterError::Unclassifiable {
                    token: token.to_string(),
                })?;
            return Ok(FilterSpec::new(FilterKind::UserId, Matcher::UserId(id), token));
        }

        if IPV4.is_match(token) || IPV6.is_match(token) {
            return Ok(FilterSpec::new(
                FilterKind::ClientIp,
                Matcher::ClientIp(token.to_string()),
                token,
            ));
        }

        if let Some(method) = METHODS
            .iter()
            .find(|method| method.eq_ignore_ascii_case(token))
        {
            return Ok(FilterSpec::new(
                FilterKind::Method,
                Matcher::Method(method.to_string()),
                token,
            ));
        }

        if let Some(caps) = DATE_TIME.captures(token) {
            let date = &caps["date"];
            let time = caps.name("time").map(|m| m.as_str());
            let invalid = || FilterError::InvalidDate {
                token: token.to_string(),
            };
            let gateway_date = iso_to_gateway_date(date).ok_or_else(invalid)?;

            let target = match (self.mode, time) {
                (FormatMode::GatewayLog, Some(time)) => format!("{gateway_date}:{time}"),
                (FormatMode::GatewayLog, None) => gateway_date,
                (FormatMode::ApplicationLog, Some(time)) => format!("{date} {time}"),
                (FormatMode::ApplicationLog, None) => date.to_string(),
            };
            return Ok(FilterSpec::new(
                FilterKind::DateTimePrefix,
                Matcher::DateTimePrefix(target),
                token,
            ));
        }

        if LABEL.is_match(token) {
            let label = token.to_string();
            let matcher = match self.mode {
                FormatMode::ApplicationLog => Matcher::HostLabel(label),
                FormatMode::GatewayLog => Matcher::HostSubdomain(label),
            };
            return Ok(FilterSpec::new(FilterKind::Hostname, matcher, token));
        }

        if DOMAIN.is_match(token) && token.bytes().any(|b| b.is_ascii_alphabetic()) {
            if !self.mode.is_gateway() {
                return Err(FilterError::FullHostnameInAppMode {
                    token: token.to_string(),
                });
            }
            return Ok(FilterSpec::new(
                FilterKind::Hostname,
                Matcher::HostExact(token.to_ascii_lowercase()),
                token,
            ));
        }

        if token.starts_with('/') && !token.chars().any(char::is_whitespace) {
            return Ok(FilterSpec::new(
                FilterKind::Path,
                Matcher::Path(token.to_string()),
                token,
            ));
        }

        Err(FilterError::Unclassifiable {
            token: token.to_string(),
        })
    }

    fn upgrade(&mut self, reason: ModeUpgrade) {
        if self.mode.upgrade_to_gateway() {
            tracing::warn!("{reason}");
            self.upgrades.push(reason);
        }
    }

    pub fn finish(self, specs: Vec<FilterSpec>) -> Classification {
        Classification {
            specs,
            mode: self.mode,
            emit_all: self.emit_all,
            upgrades: self.upgrades,
        }
    }
}

/// Classify every term of a run.
///
/// Mode upgrades implied anywhere in the terms or toggles are applied before
/// the first term is compiled, so every filter is built for the final mode
/// regardless of term order.
pub fn classify_terms<S: AsRef<str>>(
    terms: &[S],
    mode: FormatMode,
    toggles: &CategoryToggles,
) -> Result<Classification, FilterError> {
    let mut classifier = FilterClassifier::new(mode);
    classifier.select_categories(toggles);

    if terms.iter().any(|term| term.as_ref() == "502") {
        classifier.upgrade(ModeUpgrade::BadGatewayStatus);
    }

    let specs = terms
        .iter()
        .map(|term| classifier.classify(term.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(classifier.finish(specs))
}
