use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{date} is in the future")]
    DateInFuture { date: NaiveDate },

    #[error("{date} is {days} days ago, but logs are only retained for {retention} days")]
    DateBeyondRetention {
        date: NaiveDate,
        days: i64,
        retention: u32,
    },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
