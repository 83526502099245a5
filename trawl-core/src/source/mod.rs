//! Locating and reading rotated log files.

mod discover;
mod error;
mod open;

#[cfg(test)]
mod tests;

pub use discover::{DEFAULT_MIN_HOURS, FileSelection, date_index, discover, rotation_path};
pub use error::SourceError;
pub use open::open_log;
