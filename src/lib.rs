use std::path::PathBuf;

pub mod audio;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod library;
pub mod processor;
pub mod utils;

/// One show folder found under the series directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    pub folder: PathBuf,
    pub folder_name: String,
    pub clean_name: String,
    pub theme_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory scan error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Download error: {0}")]
    Download(String),
    #[error("Audio probe error: {0}")]
    Probe(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;

// Re-exports for convenience
pub use config::Config;
pub use fetch::{FetchRequest, ThemeSource};
pub use fetch::ytdlp::YtDlp;
pub use library::naming::ShowNamer;
pub use library::scanner::FolderScanner;
pub use processor::{FolderOutcome, FolderProcessor, FolderReport, RunSummary};
