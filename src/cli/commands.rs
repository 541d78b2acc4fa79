use clap::Parser;
use std::path::PathBuf;

/// Flags are optional; anything left out comes from the environment
/// (`SERIES_DIR`, `MAX_DURATION_SEC`, `YTDLP_PATH`).
#[derive(Parser, Debug)]
#[command(name = "theme-fetcher")]
#[command(version = "1.0")]
#[command(about = "Fetches a theme.mp3 opening tune into every show folder of a TV library", long_about = None)]
pub struct Cli {
    /// Directory holding one folder per show
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Reject candidates lasting this many seconds or more
    #[arg(short = 'm', long = "max-duration")]
    pub max_duration: Option<i64>,

    /// Path to the yt-dlp binary
    #[arg(long = "yt-dlp")]
    pub yt_dlp: Option<PathBuf>,

    /// Only show what would be fetched
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Write a CSV report of every folder's outcome
    #[arg(short = 'r', long)]
    pub report: Option<PathBuf>,
}
