use std::path::PathBuf;
use log::warn;
use crate::cli::commands::Cli;

pub const SERIES_DIR_VAR: &str = "SERIES_DIR";
pub const MAX_DURATION_VAR: &str = "MAX_DURATION_SEC";
pub const YTDLP_PATH_VAR: &str = "YTDLP_PATH";

pub const DEFAULT_SERIES_DIR: &str = "series";
pub const CURRENT_DIR: &str = ".";
pub const DEFAULT_MAX_DURATION_SECS: i64 = 240;
pub const DEFAULT_YTDLP: &str = "yt-dlp";

/// Settings for one run. Built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub series_dir: PathBuf,
    pub max_duration_secs: i64,
    pub downloader: PathBuf,
    pub dry_run: bool,
    pub report: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            series_dir: PathBuf::from(DEFAULT_SERIES_DIR),
            max_duration_secs: DEFAULT_MAX_DURATION_SECS,
            downloader: PathBuf::from(DEFAULT_YTDLP),
            dry_run: false,
            report: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup, so tests don't
    /// have to touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // An empty SERIES_DIR means the working directory.
        let series_dir = match lookup(SERIES_DIR_VAR) {
            Some(dir) if dir.is_empty() => PathBuf::from(CURRENT_DIR),
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_SERIES_DIR),
        };

        let max_duration_secs = match lookup(MAX_DURATION_VAR) {
            Some(raw) => parse_max_duration(&raw),
            None => DEFAULT_MAX_DURATION_SECS,
        };

        let downloader = lookup(YTDLP_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_YTDLP));

        Self {
            series_dir,
            max_duration_secs,
            downloader,
            ..Self::default()
        }
    }

    /// Command line flags win over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.dir {
            self.series_dir = dir.clone();
        }
        if let Some(secs) = cli.max_duration {
            self.max_duration_secs = secs;
        }
        if let Some(bin) = &cli.yt_dlp {
            self.downloader = bin.clone();
        }
        self.dry_run = cli.dry_run;
        self.report = cli.report.clone();
        self
    }
}

/// Any integer is kept, even a negative one that rejects every candidate.
fn parse_max_duration(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(secs) => secs,
        Err(_) => {
            warn!(
                "{} is not a valid number ({:?}). Using default value ({}s).",
                MAX_DURATION_VAR, raw, DEFAULT_MAX_DURATION_SECS
            );
            DEFAULT_MAX_DURATION_SECS
        }
    }
}
