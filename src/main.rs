use std::process::ExitCode;
use clap::Parser;
use log::{error, info};
use theme_fetcher::{
    Config,
    FolderProcessor,
    ThemeError,
    YtDlp,
    utils::reporting::Reporter,
};
use theme_fetcher::cli::commands::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env().with_cli(&cli);

    info!("=== Starting Theme Downloader ===");
    info!(
        "Configuration: Base Directory: {}, Max Duration: {}s, Downloader: {}",
        config.series_dir.display(),
        config.max_duration_secs,
        config.downloader.display()
    );
    if config.dry_run {
        info!("Dry run mode: nothing will be downloaded");
    }

    let source = YtDlp::new(&config.downloader);
    let processor = FolderProcessor::new(&config, &source);

    let summary = match processor.run() {
        Ok(summary) => summary,
        Err(ThemeError::Config(message)) => {
            error!("Error: {}", message);
            error!("Please check the volume mount and/or the SERIES_DIR environment variable.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("Error scanning {}: {}", config.series_dir.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let reporter = Reporter::new();
    reporter.print_summary(&summary);

    if let Some(report_path) = &config.report {
        if let Err(e) = reporter.write_run_report(&summary, report_path) {
            error!("Error generating report: {}", e);
        }
    }

    info!("=== Theme Downloader Complete ===");
    ExitCode::SUCCESS
}
