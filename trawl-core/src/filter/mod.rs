//! Filter terms, path categories and record acceptance.

mod category;
mod classify;
mod engine;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use category::{CategoryToggles, PathCategory, categorize};
pub use classify::{Classification, FilterClassifier, ModeUpgrade, classify_terms};
pub use engine::FilterEngine;
pub use error::FilterError;
pub use types::{FilterKind, FilterSpec, Matcher};
