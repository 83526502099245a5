use crate::filter::CategoryToggles;
use crate::record::FormatMode;
use crate::source::{DEFAULT_MIN_HOURS, FileSelection};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// IP address, hostname, user id, path, method, date/time or status code
    /// to search for; all terms must match
    #[arg(required = true, value_name = "FILTER")]
    pub terms: Vec<String>,

    /// Search the reverse proxy's access log instead of the application log
    #[arg(long)]
    pub nginx: bool,

    /// Search every retained rotation
    #[arg(short = 'A', long, conflicts_with_all = ["log_files", "date"])]
    pub all_logs: bool,

    /// Search the current file and N-1 previous rotations
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "date")]
    pub log_files: Option<u32>,

    /// Search only the file covering this day
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Also read the previous rotation when the current file likely covers
    /// fewer than this many hours
    #[arg(long, value_name = "HOURS", default_value_t = DEFAULT_MIN_HOURS)]
    pub min_hours: u32,

    /// Show every matching line, whatever its path category
    #[arg(short = 'L', long)]
    pub all_lines: bool,

    #[command(flatten)]
    pub categories: CategoryToggles,

    /// Only show requests whose user agent contains this text
    #[arg(long, value_name = "SUBSTRING")]
    pub client: Option<String>,

    /// Report gaps and overlaps between consecutive requests
    #[arg(long)]
    pub timeline: bool,

    /// Print request count and duration percentiles at the end
    #[arg(long)]
    pub stats: bool,

    /// Config file (defaults to $TRAWL_CONFIG, then /etc/trawl/trawl.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl SearchArgs {
    pub fn format(&self) -> FormatMode {
        if self.nginx {
            FormatMode::GatewayLog
        } else {
            FormatMode::ApplicationLog
        }
    }

    pub fn selection(&self) -> FileSelection {
        if self.all_logs {
            FileSelection::All
        } else if let Some(n) = self.log_files {
            FileSelection::Count(n)
        } else if let Some(date) = self.date {
            FileSelection::Date(date)
        } else {
            FileSelection::Recent {
                min_hours: self.min_hours,
            }
        }
    }
}
