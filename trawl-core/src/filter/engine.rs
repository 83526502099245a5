use crate::filter::category::{CategoryToggles, categorize};
use crate::filter::classify::Classification;
use crate::filter::types::{FilterKind, FilterSpec};
use crate::record::LogRecord;

/// Decides which parsed records are reported.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    specs: Vec<FilterSpec>,
    client: Option<String>,
    toggles: CategoryToggles,
    emit_all: bool,
    needles: Vec<String>,
}

impl FilterEngine {
    pub fn new(specs: Vec<FilterSpec>, client: Option<String>, toggles: CategoryToggles) -> Self {
        let needles = specs
            .iter()
            .filter_map(|spec| spec.matcher.needle())
            .chain(
                client
                    .iter()
                    .filter(|c| !c.is_empty())
                    .map(|c| c.to_ascii_lowercase()),
            )
            .collect();

        Self {
            specs,
            client,
            toggles,
            emit_all: false,
            needles,
        }
    }

    pub fn from_classification(
        classification: &Classification,
        client: Option<String>,
        toggles: CategoryToggles,
        all_lines: bool,
    ) -> Self {
        Self::new(classification.specs.clone(), client, toggles)
            .with_emit_all(classification.emit_all || all_lines)
    }

    /// Skip category suppression entirely.
    pub fn with_emit_all(mut self, emit_all: bool) -> Self {
        self.emit_all = emit_all;
        self
    }

    pub fn has(&self, kind: FilterKind) -> bool {
        self.specs.iter().any(|spec| spec.kind == kind)
    }

    /// Lower-cased literals every accepted line contains.
    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    /// Cheap whole-line check run before parsing.
    ///
    /// Every needle is a literal the structural match would require, so a
    /// `false` here never hides a line [`FilterEngine::accepts`] would keep.
    pub fn prefilter(&self, line: &str) -> bool {
        if self.needles.is_empty() {
            return true;
        }
        let line = line.to_ascii_lowercase();
        self.needles.iter().all(|needle| line.contains(needle.as_str()))
    }

    pub fn accepts(&self, record: &LogRecord) -> bool {
        if !self.specs.iter().all(|spec| spec.matches(record)) {
            return false;
        }

        if let Some(client) = &self.client {
            if !record.user_agent.contains(client.as_str()) {
                return false;
            }
        }

        self.emit_all || self.toggles.allows(categorize(&record.path))
    }
}
