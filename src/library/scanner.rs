use std::path::Path;
use log::debug;
use walkdir::WalkDir;
use crate::library::naming::ShowNamer;
use crate::utils::file_ops;
use crate::{Result, ShowEntry, ThemeError};

/// Lists the show folders directly under the series directory.
pub struct FolderScanner {
    namer: ShowNamer,
}

impl Default for FolderScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderScanner {
    pub fn new() -> Self {
        Self {
            namer: ShowNamer::new(),
        }
    }

    /// Immediate subdirectories only, sorted by name. Plain files and
    /// dangling symlinks are ignored; symlinks to directories are followed.
    ///
    /// A missing base directory is a configuration error. Errors while
    /// reading the directory itself are returned as-is.
    pub fn scan(&self, series_dir: impl AsRef<Path>) -> Result<Vec<ShowEntry>> {
        let series_dir = series_dir.as_ref();
        if !series_dir.is_dir() {
            return Err(ThemeError::Config(format!(
                "base directory '{}' does not exist",
                series_dir.display()
            )));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(series_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.path().is_dir() {
                debug!("Skipping non-directory: {}", entry.path().display());
                continue;
            }
            entries.push(self.entry_for(entry.path()));
        }

        Ok(entries)
    }

    pub fn entry_for(&self, folder: &Path) -> ShowEntry {
        let folder_name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        ShowEntry {
            folder: folder.to_path_buf(),
            clean_name: self.namer.clean_name(&folder_name),
            theme_path: file_ops::theme_path(folder),
            folder_name,
        }
    }
}
