use std::path::PathBuf;
use crate::utils::file_ops;
use crate::{Result, ShowEntry};

pub mod ytdlp;

pub const QUERY_SUFFIX: &str = "tv show opening theme audio";

/// Everything the downloader needs to look up one show's theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub output_template: PathBuf,
    pub theme_path: PathBuf,
    pub max_duration_secs: i64,
}

impl FetchRequest {
    pub fn for_show(entry: &ShowEntry, max_duration_secs: i64) -> Self {
        Self {
            query: search_query(&entry.clean_name),
            output_template: file_ops::output_template(&entry.folder),
            theme_path: entry.theme_path.clone(),
            max_duration_secs,
        }
    }
}

pub fn search_query(clean_name: &str) -> String {
    format!("{} {}", clean_name, QUERY_SUFFIX)
}

/// Something that can search for a theme and leave an mp3 at
/// `request.theme_path`.
///
/// Returning `Ok(())` does not promise the file exists: every candidate may
/// have been filtered out. Callers confirm by checking the filesystem.
pub trait ThemeSource {
    fn fetch(&self, request: &FetchRequest) -> Result<()>;
}
