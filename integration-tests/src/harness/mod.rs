mod fixture;
pub mod lines;
pub mod tracing;

pub use fixture::{LogFixture, SearchRun, Tier, search_args};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
