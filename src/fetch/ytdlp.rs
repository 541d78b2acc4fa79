use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use log::debug;
use crate::fetch::{FetchRequest, ThemeSource};
use crate::{Result, ThemeError};

const SEARCH_PREFIX: &str = "ytsearch1:";
const AUDIO_FORMAT: &str = "mp3";
const AUDIO_QUALITY: &str = "192K";

/// Runs the `yt-dlp` binary once per request and waits for it to exit.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
}

impl YtDlp {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Top search hit only, shorter than the limit, audio extracted to a
    /// 192 kbps mp3.
    pub fn build_args(request: &FetchRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--format",
            "bestaudio/best",
            "--no-playlist",
            "--quiet",
            "--no-warnings",
            "--no-progress",
            "--match-filter",
        ]
        .iter()
        .map(OsString::from)
        .collect();

        args.push(format!("duration < {}", request.max_duration_secs).into());
        args.extend(
            ["--extract-audio", "--audio-format", AUDIO_FORMAT, "--audio-quality", AUDIO_QUALITY]
                .iter()
                .map(OsString::from),
        );
        args.push("--output".into());
        args.push(request.output_template.clone().into_os_string());
        args.push(format!("{}{}", SEARCH_PREFIX, request.query).into());
        args
    }
}

impl ThemeSource for YtDlp {
    fn fetch(&self, request: &FetchRequest) -> Result<()> {
        let args = Self::build_args(request);
        debug!("Running {} {:?}", self.binary.display(), args);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| {
                ThemeError::Download(format!(
                    "failed to run {} (is it installed?): {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .rev()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or("no error output");
            return Err(ThemeError::Download(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                message
            )));
        }

        Ok(())
    }
}
