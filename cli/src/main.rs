//! CLI entrypoint for tally
//!
//! This is the main binary that wires together all layers: config files
//! merged under CLI flags, a text-file export sink injected into the
//! export use case, and the TUI on top.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tally_application::ExportHistoryUseCase;
use tally_infrastructure::{ConfigLoader, FileConfig, Severity, TextFileExportSink};
use tally_presentation::{App, Cli, Theme, TuiOptions};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. The terminal belongs
    // to the TUI, so log lines go to a file instead of stderr.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let _log_guard = init_file_logging(filter)?;

    info!("Starting tally");

    // --show-config prints lookup locations and the merged result, then exits
    if cli.show_config {
        ConfigLoader::print_config_sources();
        let config = load_config(&cli)?;
        report_config_issues(&config);
        ConfigLoader::print_effective_config(&config);
        return Ok(());
    }

    let config = load_config(&cli)?;
    report_config_issues(&config);

    // === Dependency Injection ===
    // CLI flags override config file values
    let theme = match cli.theme {
        Some(arg) => Theme::from(arg),
        None => config.tui.theme.parse().unwrap_or_default(),
    };

    let tick_rate_ms = if config.tui.tick_rate_ms == 0 {
        200
    } else {
        config.tui.tick_rate_ms
    };

    let export_dir = cli
        .export_dir
        .clone()
        .or_else(|| config.export.directory.clone());
    let sink = match export_dir {
        Some(dir) => TextFileExportSink::with_directory(dir),
        None => TextFileExportSink::new(),
    };

    let file_name = if config.export.file_name.trim().is_empty() {
        tally_application::DEFAULT_EXPORT_FILE_NAME.to_string()
    } else {
        config.export.file_name.clone()
    };
    let exporter = ExportHistoryUseCase::new(sink).with_file_name(file_name);

    let options = TuiOptions {
        theme,
        tick_rate: Duration::from_millis(tick_rate_ms),
    };

    let mut app = App::new(exporter, options);
    app.run().context("TUI terminated abnormally")?;

    info!("Shutting down tally");
    Ok(())
}

/// Load configuration honoring --config and --no-config
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")
}

/// Log every validation issue; the offending fields fall back to defaults
fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("config {}: {}", issue.field, issue.message),
            Severity::Error => error!("config {}: {}", issue.field, issue.message),
        }
    }
}

/// Route tracing output to a log file under the platform data directory
fn init_file_logging(filter: EnvFilter) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "tally.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
