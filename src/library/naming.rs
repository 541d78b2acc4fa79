use regex::Regex;
use std::sync::Arc;

/// Turns folder names like `Breaking Bad (2008) {tmdb-1396}` into the bare
/// show title used for searching.
#[derive(Debug, Clone)]
pub struct ShowNamer {
    year_regex: Arc<Regex>,
}

impl Default for ShowNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowNamer {
    pub fn new() -> Self {
        Self {
            // Title up to the space before a "(YYYY)" group; anything after is ignored.
            year_regex: Arc::new(Regex::new(r"^(.*?)\s\(\d{4}\).*").unwrap()),
        }
    }

    /// Strips the year and whatever follows it. Names without a year come
    /// back unchanged, as does any name whose title part would be blank.
    pub fn clean_name(&self, folder_name: &str) -> String {
        let cleaned = self
            .year_regex
            .captures(folder_name)
            .and_then(|caps| caps.get(1))
            .map_or(folder_name, |title| title.as_str());

        if cleaned.trim().is_empty() {
            return folder_name.to_string();
        }
        cleaned.to_string()
    }
}
