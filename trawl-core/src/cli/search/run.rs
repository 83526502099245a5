use crate::cli::search::args::SearchArgs;
use crate::cli::search::render::{RenderOptions, render_gap, render_record, render_stats};
use crate::cli::search::sink::OutputSink;
use crate::cli::search::stats_aggregation::DurationAggregator;
use crate::cli::search::timeline::TimelineTracker;
use crate::config::{HostDecorator, SuffixDecorator, TrawlConfig};
use crate::filter::{FilterEngine, FilterKind, classify_terms};
use crate::logging::{ColorMode, default_color_mode};
use crate::record::{FormatMode, parse_line};
use crate::source::{discover, open_log};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Everything a search pass needs, resolved before the first line is read.
///
/// Building a plan is where every fatal condition surfaces, so a failed plan
/// never leaves partial results on stdout.
pub struct SearchPlan {
    pub mode: FormatMode,
    pub engine: FilterEngine,
    /// Oldest first.
    pub sources: Vec<(PathBuf, Box<dyn BufRead>)>,
    pub decorator: SuffixDecorator,
    pub render: RenderOptions,
    pub timeline: bool,
    pub stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed { matched: usize },
    /// The reader of our output went away mid-pass.
    OutputClosed,
}

pub fn plan_search(
    args: &SearchArgs,
    config: &TrawlConfig,
    today: NaiveDate,
    color: ColorMode,
) -> Result<SearchPlan> {
    let classification = classify_terms(&args.terms, args.format(), &args.categories)
        .context("invalid search terms")?;
    let mode = classification.mode;

    if args.timeline && mode.is_gateway() {
        tracing::warn!("gateway timestamps have one-second precision; timeline gaps are approximate");
    }

    let base = config.log_path(mode);
    let mut paths = discover(base, args.selection(), config.log_retention_days, today)
        .with_context(|| format!("failed to select {mode} logs under {}", base.display()))?;
    paths.reverse();

    let sources = paths
        .into_iter()
        .map(|path| {
            let reader = open_log(&path)?;
            Ok((path, reader))
        })
        .collect::<Result<Vec<_>>>()?;

    let render = RenderOptions {
        show_user_id: !mode.is_gateway() && !classification.has(FilterKind::UserId),
        show_client: !classification.has(FilterKind::ClientIp),
        color,
    };

    let engine = FilterEngine::from_classification(
        &classification,
        args.client.clone(),
        args.categories,
        args.all_lines,
    );

    Ok(SearchPlan {
        mode,
        engine,
        sources,
        decorator: config.host_decorator(),
        render,
        timeline: args.timeline,
        stats: args.stats,
    })
}

/// Stream every source through the filters into `sink`.
pub fn execute<W: Write>(plan: SearchPlan, sink: &mut OutputSink<W>) -> Result<SearchOutcome> {
    let SearchPlan {
        mode,
        engine,
        sources,
        decorator,
        render,
        timeline,
        stats,
    } = plan;

    let mut tracker = TimelineTracker::new();
    let mut aggregator = DurationAggregator::new();
    let mut matched = 0;
    let mut buf = Vec::new();

    for (path, mut reader) in sources {
        tracing::debug!(path = %path.display(), "searching");

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            if !engine.prefilter(line) {
                continue;
            }

            let Some(record) = parse_line(line, mode) else {
                if mode.is_gateway() {
                    tracing::warn!(line, "unparseable gateway log line");
                }
                continue;
            };

            if !engine.accepts(&record) {
                continue;
            }

            matched += 1;
            if timeline {
                if let Some(gap) = tracker.observe(&record) {
                    sink.write_line(&render_gap(&gap, render.color))?;
                }
            }
            if stats {
                aggregator.record(record.duration_ms);
            }

            let host = decorator.display_host(&record.hostname, record.format);
            sink.write_line(&render_record(&record, &host, &render))?;

            if sink.is_closed() {
                return Ok(SearchOutcome::OutputClosed);
            }
        }
    }

    if stats {
        let summary = aggregator.summary();
        sink.write_block(&render_stats(aggregator.len(), summary.as_ref()))?;
    }
    sink.flush()?;

    if sink.is_closed() {
        return Ok(SearchOutcome::OutputClosed);
    }
    Ok(SearchOutcome::Completed { matched })
}

pub fn run_search(args: &SearchArgs) -> Result<SearchOutcome> {
    let config = TrawlConfig::load(args.config.as_deref())?;
    let today = Local::now().date_naive();
    let plan = plan_search(args, &config, today, default_color_mode())?;

    let stdout = io::stdout();
    let mut sink = OutputSink::new(stdout.lock());
    execute(plan, &mut sink)
}
