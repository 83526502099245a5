use crate::harness::init_test_tracing;
use chrono::NaiveDate;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use trawl_core::cli::search::{OutputSink, SearchArgs, SearchOutcome, execute, plan_search};
use trawl_core::config::TrawlConfig;
use trawl_core::logging::ColorMode;
use trawl_core::source::rotation_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    App,
    Gateway,
}

/// A log directory plus a config file pointing at it.
pub struct LogFixture {
    dir: TempDir,
    config_path: PathBuf,
}

pub struct SearchRun {
    pub outcome: SearchOutcome,
    pub lines: Vec<String>,
}

impl LogFixture {
    /// `extra_config` is appended to the generated TOML.
    pub fn new(extra_config: &str) -> Self {
        init_test_tracing();

        let dir = tempfile::tempdir().expect("failed to create log dir");
        let config_path = dir.path().join("trawl.toml");
        let config = format!(
            "app_log_path = {:?}\ngateway_log_path = {:?}\n{extra_config}",
            dir.path().join("server.log").display().to_string(),
            dir.path().join("access.log").display().to_string(),
        );
        fs::write(&config_path, config).expect("failed to write config");

        Self { dir, config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn base(&self, tier: Tier) -> PathBuf {
        match tier {
            Tier::App => self.dir.path().join("server.log"),
            Tier::Gateway => self.dir.path().join("access.log"),
        }
    }

    /// Write rotation `index`, compressed from `.2` on as logrotate leaves it.
    pub fn write(&self, tier: Tier, index: u32, lines: &[String]) {
        let path = rotation_path(&self.base(tier), index);
        let mut body = lines.join("\n");
        body.push('\n');

        if index >= 2 {
            let file = fs::File::create(&path).expect("failed to create rotation");
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(body.as_bytes()).unwrap();
            encoder.finish().unwrap();
        } else {
            fs::write(&path, body).expect("failed to write log");
        }
    }

    /// Plan and run a search the way the binary does, capturing stdout.
    pub fn search(&self, args: &SearchArgs, today: NaiveDate) -> Result<SearchRun, String> {
        let config = TrawlConfig::load(Some(&self.config_path)).map_err(|e| e.to_string())?;
        let plan =
            plan_search(args, &config, today, ColorMode::Never).map_err(|e| format!("{e:#}"))?;

        let mut sink = OutputSink::new(Vec::new());
        let outcome = execute(plan, &mut sink).map_err(|e| format!("{e:#}"))?;

        let output = String::from_utf8(sink.into_inner()).expect("output is utf-8");
        Ok(SearchRun {
            outcome,
            lines: output.lines().map(str::to_string).collect(),
        })
    }
}

pub fn search_args(terms: &[&str]) -> SearchArgs {
    SearchArgs {
        terms: terms.iter().map(|t| t.to_string()).collect(),
        min_hours: 3,
        ..SearchArgs::default()
    }
}
