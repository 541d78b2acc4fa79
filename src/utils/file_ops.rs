use std::path::{Path, PathBuf};

pub const THEME_STEM: &str = "theme";
pub const THEME_EXTENSION: &str = "mp3";

/// `<folder>/theme.mp3`
pub fn theme_path(folder: impl AsRef<Path>) -> PathBuf {
    folder
        .as_ref()
        .join(format!("{}.{}", THEME_STEM, THEME_EXTENSION))
}

/// Output template handed to yt-dlp. The extension is left to the
/// downloader, which names the file after the post-processed codec.
pub fn output_template(folder: impl AsRef<Path>) -> PathBuf {
    folder.as_ref().join(format!("{}.%(ext)s", THEME_STEM))
}

/// Anything already sitting at the path counts, so it is never clobbered.
pub fn theme_exists(theme_path: impl AsRef<Path>) -> bool {
    theme_path.as_ref().exists()
}
