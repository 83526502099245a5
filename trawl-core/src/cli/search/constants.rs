/// Gaps above this are reported in whole seconds.
pub const LARGE_GAP_MS: i64 = 5000;
pub const MEDIUM_GAP_MS: i64 = 1000;

pub const PERCENTILES: [u64; 5] = [50, 75, 90, 95, 99];
