use crate::source::error::SourceError;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MIN_HOURS: u32 = 3;

/// Which rotations of a log to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSelection {
    /// The current file, plus the previous one when the current file looks
    /// like it covers fewer than `min_hours` hours.
    Recent { min_hours: u32 },
    /// Every rotation still on disk.
    All,
    /// The current file and `n - 1` predecessors.
    Count(u32),
    /// The single file covering this day.
    Date(NaiveDate),
}

impl Default for FileSelection {
    fn default() -> Self {
        FileSelection::Recent {
            min_hours: DEFAULT_MIN_HOURS,
        }
    }
}

/// Path of rotation `index`: the live file, `.1`, then `.N.gz`.
pub fn rotation_path(base: &Path, index: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    match index {
        0 => {}
        1 => name.push(".1"),
        n => name.push(format!(".{n}.gz")),
    }
    PathBuf::from(name)
}

/// Rotation index holding `date`, given that logs rotate daily.
pub fn date_index(date: NaiveDate, today: NaiveDate, retention: u32) -> Result<u32, SourceError> {
    let days = (today - date).num_days();
    if days < 0 {
        return Err(SourceError::DateInFuture { date });
    }
    if days > i64::from(retention) {
        return Err(SourceError::DateBeyondRetention {
            date,
            days,
            retention,
        });
    }
    Ok(days as u32)
}

/// List the files to search, newest first.
///
/// Callers that care about chronology must reverse the result.
pub fn discover(
    base: &Path,
    selection: FileSelection,
    retention: u32,
    today: NaiveDate,
) -> Result<Vec<PathBuf>, SourceError> {
    let files = match selection {
        FileSelection::Recent { min_hours } => {
            let mut files = vec![base.to_path_buf()];
            if recently_rotated(base, min_hours)? {
                files.push(rotation_path(base, 1));
            }
            files
        }
        FileSelection::All => (0..=retention)
            .map(|index| rotation_path(base, index))
            .take_while(|path| path.exists())
            .collect(),
        FileSelection::Count(n) => (0..n.max(1)).map(|index| rotation_path(base, index)).collect(),
        FileSelection::Date(date) => vec![rotation_path(base, date_index(date, today, retention)?)],
    };

    tracing::debug!(?selection, files = files.len(), "selected log files");
    Ok(files)
}

/// Estimate from on-disk sizes whether the live file covers less than
/// `min_hours`, assuming a roughly even logging rate across the day.
fn recently_rotated(base: &Path, min_hours: u32) -> Result<bool, SourceError> {
    let current = fs::metadata(base)
        .map_err(|e| SourceError::open(base, e))?
        .len();

    let previous_path = rotation_path(base, 1);
    let Ok(previous) = fs::metadata(&previous_path) else {
        return Ok(false);
    };

    Ok((current as f64) < f64::from(min_hours) / 24.0 * previous.len() as f64)
}
