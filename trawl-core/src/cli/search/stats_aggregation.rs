use crate::cli::search::constants::PERCENTILES;

/// Collects request durations for the end-of-run summary.
#[derive(Debug, Default)]
pub struct DurationAggregator {
    samples: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSummary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    /// `(percentile, ms)` pairs in ascending percentile order.
    pub percentiles: Vec<(u64, u64)>,
}

impl DurationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, duration_ms: u64) {
        self.samples.push(duration_ms);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `None` when nothing was recorded.
    pub fn summary(&self) -> Option<DurationSummary> {
        if self.samples.is_empty() {
            return None;
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        Some(DurationSummary {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            percentiles: PERCENTILES
                .iter()
                .map(|&pct| (pct, percentile(&sorted, pct)))
                .collect(),
        })
    }
}

/// Linear interpolation between closest ranks (rank = p/100 * (n - 1)),
/// truncated to whole milliseconds.
///
/// Done in integer arithmetic (widened to `u128`) so the truncation is exact.
pub fn percentile(sorted: &[u64], pct: u64) -> u64 {
    match sorted.len() {
        0 => return 0,
        1 => return sorted[0],
        _ => {}
    }

    let rank = pct.min(100) * (sorted.len() as u64 - 1);
    let lower = (rank / 100) as usize;
    let fraction = rank % 100;

    if fraction == 0 {
        return sorted[lower];
    }
    let (low, high) = (sorted[lower], sorted[lower + 1]);
    let step = u128::from(high - low) * u128::from(fraction) / 100;
    low + step as u64
}
