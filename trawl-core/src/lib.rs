pub mod cli;
pub mod config;
pub mod filter;
pub mod logging;
pub mod record;
pub mod source;
