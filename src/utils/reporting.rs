use std::path::Path;
use csv::Writer;
use log::info;
use serde::Serialize;
use crate::processor::{FolderOutcome, RunSummary};
use crate::Result;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Folder")]
    folder: &'a str,
    #[serde(rename = "Clean Name")]
    clean_name: &'a str,
    #[serde(rename = "Outcome")]
    outcome: &'static str,
    #[serde(rename = "Duration (s)")]
    duration: String,
    #[serde(rename = "Detail")]
    detail: &'a str,
}

pub struct Reporter;

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_run_report(&self, summary: &RunSummary, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = Writer::from_path(output_path_ref)?;

        for report in &summary.reports {
            let (duration, detail) = match &report.outcome {
                FolderOutcome::Fetched { duration_secs: Some(secs) } => (format!("{:.1}", secs), ""),
                FolderOutcome::Failed(message) => (String::new(), message.as_str()),
                _ => (String::new(), ""),
            };

            writer.serialize(ReportRow {
                folder: &report.entry.folder_name,
                clean_name: &report.entry.clean_name,
                outcome: report.outcome.as_str(),
                duration,
                detail,
            })?;
        }

        writer.flush()?;
        info!("Report generated: {}", output_path_ref.display());
        Ok(())
    }

    /// One line per outcome, for the end of a run.
    pub fn print_summary(&self, summary: &RunSummary) {
        info!(
            "Done: {} folders, {} fetched, {} skipped, {} without match, {} failed, {} planned",
            summary.reports.len(),
            summary.fetched(),
            summary.skipped(),
            summary.no_match(),
            summary.failed(),
            summary.planned(),
        );
    }
}
