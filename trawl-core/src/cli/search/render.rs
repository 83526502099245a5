use crate::cli::search::stats_aggregation::DurationSummary;
use crate::cli::search::timeline::GapReport;
use crate::logging::ColorMode;
use crate::record::LogRecord;
use owo_colors::OwoColorize;

/// Which columns a result line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Off for gateway logs, and when a user id filter already pins it.
    pub show_user_id: bool,
    /// Off when a client address filter already pins it.
    pub show_client: bool,
    pub color: ColorMode,
}

pub fn status_indicator(status: u16) -> char {
    match status {
        300..=399 => '>',
        400..=499 => '!',
        500..=599 => '*',
        _ => ' ',
    }
}

pub fn render_record(record: &LogRecord, host: &str, options: &RenderOptions) -> String {
    let mut out = format!("{} {:>6}ms", record.date_time(), record.duration_ms);

    if options.show_user_id {
        let user = record
            .user_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(" {user:>6}"));
    }

    if options.show_client {
        out.push_str(&format!(" {:<15}", record.client));
    }

    out.push_str(&format!(
        " {}{} {:<6} https://{}{}",
        status_indicator(record.status),
        record.status,
        record.method,
        host,
        record.full_path
    ));

    if options.color == ColorMode::Never {
        return out;
    }
    match record.status {
        200..=299 => out.green().to_string(),
        300..=399 => out.cyan().to_string(),
        400..=499 => out.yellow().to_string(),
        500..=599 => out.red().to_string(),
        _ => out,
    }
}

pub fn render_gap(gap: &GapReport, color: ColorMode) -> String {
    let out = match gap {
        GapReport::Large { secs } => format!("~~~~~~~~ {secs}s gap ~~~~~~~~"),
        GapReport::Medium { ms } => format!("~~~~ {ms}ms gap ~~~~"),
        GapReport::Small { ms } => format!("~~ {ms}ms gap ~~"),
        GapReport::Overlap { ms } => format!("<< {ms}ms overlap >>"),
    };

    if color == ColorMode::Never {
        return out;
    }
    match gap {
        GapReport::Large { .. } => out.bold().to_string(),
        GapReport::Overlap { .. } => out.magenta().to_string(),
        _ => out.dimmed().to_string(),
    }
}

pub fn render_stats(count: usize, summary: Option<&DurationSummary>) -> String {
    let mut out = format!("Requests: {count}\n");

    if let Some(summary) = summary {
        out.push_str(&format!("  min  {:>8}ms\n", summary.min));
        for (pct, ms) in &summary.percentiles {
            out.push_str(&format!("  p{pct:<3} {ms:>8}ms\n"));
        }
        out.push_str(&format!("  max  {:>8}ms\n", summary.max));
    }

    out
}
