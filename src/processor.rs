use std::fmt;
use log::{debug, error, info, warn};
use crate::audio::probe::probe_duration;
use crate::fetch::{FetchRequest, ThemeSource};
use crate::library::scanner::FolderScanner;
use crate::utils::file_ops;
use crate::{Config, Result, ShowEntry};

#[derive(Debug, Clone, PartialEq)]
pub enum FolderOutcome {
    /// `theme.mp3` was already there.
    Skipped,
    /// Dry run: the download would have been attempted.
    Planned,
    Fetched { duration_secs: Option<f64> },
    /// The downloader ran but left no file behind.
    NoMatch,
    Failed(String),
}

impl FolderOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderOutcome::Skipped => "skipped",
            FolderOutcome::Planned => "planned",
            FolderOutcome::Fetched { .. } => "fetched",
            FolderOutcome::NoMatch => "no-match",
            FolderOutcome::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for FolderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderReport {
    pub entry: ShowEntry,
    pub outcome: FolderOutcome,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub reports: Vec<FolderReport>,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&FolderOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Skipped))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Planned))
    }

    pub fn fetched(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Fetched { .. }))
    }

    pub fn no_match(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::NoMatch))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Failed(_)))
    }
}

/// Walks the series directory one folder at a time and asks the source for
/// a theme wherever one is missing.
pub struct FolderProcessor<'a, S: ThemeSource> {
    config: &'a Config,
    source: &'a S,
    scanner: FolderScanner,
}

impl<'a, S: ThemeSource> FolderProcessor<'a, S> {
    pub fn new(config: &'a Config, source: &'a S) -> Self {
        Self {
            config,
            source,
            scanner: FolderScanner::new(),
        }
    }

    /// Fails only when the series directory can't be scanned. Per-folder
    /// download errors end up in the summary instead.
    pub fn run(&self) -> Result<RunSummary> {
        let entries = self.scanner.scan(&self.config.series_dir)?;
        info!(
            "Scanning {} show folders in {}",
            entries.len(),
            self.config.series_dir.display()
        );

        let mut summary = RunSummary::default();
        for entry in entries {
            let outcome = self.process_folder(&entry);
            summary.reports.push(FolderReport { entry, outcome });
        }

        Ok(summary)
    }

    pub fn process_folder(&self, entry: &ShowEntry) -> FolderOutcome {
        info!("Folder: {}", entry.folder_name);

        if file_ops::theme_exists(&entry.theme_path) {
            info!("  theme.mp3 already exists. Skipping.");
            return FolderOutcome::Skipped;
        }

        if entry.clean_name != entry.folder_name {
            info!("  Cleaned name identified: '{}'", entry.clean_name);
        }

        let request = FetchRequest::for_show(entry, self.config.max_duration_secs);

        if self.config.dry_run {
            info!("  Would search: '{}'", request.query);
            return FolderOutcome::Planned;
        }

        info!(
            "  Searching: '{}' (max {}s)...",
            entry.clean_name, self.config.max_duration_secs
        );

        // The file on disk decides the outcome; the source's error only
        // matters when nothing was written.
        let fetched = self.source.fetch(&request);
        let exists = file_ops::theme_exists(&entry.theme_path);

        match fetched {
            Err(e) if !exists => {
                error!("  Error downloading theme for '{}': {}", entry.folder_name, e);
                return FolderOutcome::Failed(e.to_string());
            }
            Err(e) => {
                warn!(
                    "  Downloader reported an error for '{}' but theme.mp3 was written: {}",
                    entry.folder_name, e
                );
            }
            Ok(()) if !exists => {
                warn!("  No valid result found for '{}' (too long or unavailable).", entry.clean_name);
                return FolderOutcome::NoMatch;
            }
            Ok(()) => {}
        }

        let duration_secs = match probe_duration(&entry.theme_path) {
            Ok(duration) => duration,
            Err(e) => {
                warn!("  Could not read {}: {}", entry.theme_path.display(), e);
                None
            }
        };
        match duration_secs {
            Some(secs) => info!("  Success: theme.mp3 created ({:.1}s).", secs),
            None => info!("  Success: theme.mp3 created."),
        }
        debug!("  Saved to {}", entry.theme_path.display());

        FolderOutcome::Fetched { duration_secs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    /// Writes a placeholder theme unless the query is in `refuse`. Queries in
    /// `fail` error out before writing, those in `fail_after_write` after.
    #[derive(Default)]
    struct StubSource {
        calls: RefCell<Vec<String>>,
        refuse: Vec<&'static str>,
        fail: Vec<&'static str>,
        fail_after_write: Vec<&'static str>,
    }

    impl ThemeSource for StubSource {
        fn fetch(&self, request: &FetchRequest) -> Result<()> {
            self.calls.borrow_mut().push(request.query.clone());
            let listed = |list: &[&str]| list.iter().any(|q| request.query.starts_with(q));
            if listed(&self.fail[..]) {
                return Err(ThemeError::Download("network unreachable".into()));
            }
            if !listed(&self.refuse[..]) {
                fs::write(&request.theme_path, b"not really an mp3")?;
            }
            if listed(&self.fail_after_write[..]) {
                return Err(ThemeError::Download("yt-dlp exited with 1".into()));
            }
            Ok(())
        }
    }

    fn library(root: &Path, folders: &[&str]) -> Config {
        for folder in folders {
            fs::create_dir(root.join(folder)).unwrap();
        }
        Config {
            series_dir: root.to_path_buf(),
            ..Config::default()
        }
    }

    fn outcomes(summary: &RunSummary) -> Vec<(&str, &str)> {
        summary
            .reports
            .iter()
            .map(|r| (r.entry.folder_name.as_str(), r.outcome.as_str()))
            .collect()
    }

    #[test]
    fn fetches_missing_themes_with_clean_names() {
        let root = tempfile::tempdir().unwrap();
        let config = library(root.path(), &["Breaking Bad (2008) {tmdb-1396}", "Seinfeld"]);
        let source = StubSource::default();

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert_eq!(
            *source.calls.borrow(),
            vec![
                "Breaking Bad tv show opening theme audio".to_string(),
                "Seinfeld tv show opening theme audio".to_string(),
            ]
        );
        assert_eq!(summary.fetched(), 2);
        assert!(root.path().join("Seinfeld/theme.mp3").exists());
    }

    #[test]
    fn existing_theme_is_never_requested() {
        let root = tempfile::tempdir().unwrap();
        let config = library(root.path(), &["The Wire (2002)"]);
        fs::write(root.path().join("The Wire (2002)/theme.mp3"), b"keep me").unwrap();
        let source = StubSource::default();

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert!(source.calls.borrow().is_empty());
        assert_eq!(summary.skipped(), 1);
        assert_eq!(
            fs::read(root.path().join("The Wire (2002)/theme.mp3")).unwrap(),
            b"keep me"
        );
    }

    #[test]
    fn no_file_after_fetch_is_a_no_match() {
        let root = tempfile::tempdir().unwrap();
        let config = library(root.path(), &["Lost (2004)", "Seinfeld"]);
        let source = StubSource {
            refuse: vec!["Lost"],
            ..Default::default()
        };

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert_eq!(outcomes(&summary), vec![("Lost (2004)", "no-match"), ("Seinfeld", "fetched")]);
    }

    #[test]
    fn one_failure_does_not_stop_the_batch() {
        let root = tempfile::tempdir().unwrap();
        let config = library(root.path(), &["Alf (1986)", "Babylon 5 (1993)", "Cheers (1982)"]);
        let source = StubSource {
            fail: vec!["Babylon 5"],
            ..Default::default()
        };

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert_eq!(source.calls.borrow().len(), 3);
        assert_eq!(
            outcomes(&summary),
            vec![
                ("Alf (1986)", "fetched"),
                ("Babylon 5 (1993)", "failed"),
                ("Cheers (1982)", "fetched"),
            ]
        );
        assert_eq!(
            summary.reports[1].outcome,
            FolderOutcome::Failed("Download error: network unreachable".into())
        );
    }

    #[test]
    fn written_theme_wins_over_a_download_error() {
        let root = tempfile::tempdir().unwrap();
        let config = library(root.path(), &["Frasier (1993)", "Seinfeld"]);
        let source = StubSource {
            fail_after_write: vec!["Frasier"],
            ..Default::default()
        };

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert!(root.path().join("Frasier (1993)/theme.mp3").exists());
        assert_eq!(
            summary.reports[0].outcome,
            FolderOutcome::Fetched { duration_secs: None }
        );
        assert_eq!(summary.failed(), 0);
        assert_eq!(summary.fetched(), 2);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let root = tempfile::tempdir().unwrap();
        let mut config = library(root.path(), &["Seinfeld"]);
        config.dry_run = true;
        let source = StubSource::default();

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert!(source.calls.borrow().is_empty());
        assert_eq!(summary.planned(), 1);
        assert!(!root.path().join("Seinfeld/theme.mp3").exists());
    }

    #[test]
    fn unreadable_artifact_still_counts_as_fetched() {
        let root = tempfile::tempdir().unwrap();
        let config = library(root.path(), &["Seinfeld"]);
        let source = StubSource::default();

        let summary = FolderProcessor::new(&config, &source).run().unwrap();

        assert_eq!(
            summary.reports[0].outcome,
            FolderOutcome::Fetched { duration_secs: None }
        );
    }
}
