// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use jira_link_map::logging::{init_logging, parse_rotation, LogConfig};
use jira_link_map::{
    build_mapping, load_user_config, write_report, Catalog, ReportFormat, DEFAULT_UI_DESCRIPTIONS,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Map Jira UI link phrases to the link type names used by the API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with extra link types and/or a replacement phrase list
    #[arg(short, long, env = "JIRA_LINK_MAP_CONFIG")]
    config: Option<PathBuf>,

    /// Phrase to map; repeat to map several. Replaces the configured list.
    #[arg(short, long = "phrase")]
    phrases: Vec<String>,

    /// Report format
    #[arg(long, value_enum, env = "JIRA_LINK_MAP_FORMAT", default_value = "text")]
    format: ReportFormat,

    /// Enable JSON log format
    #[arg(long, env = "JIRA_LINK_MAP_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Also write logs to a rolling file in this directory
    #[arg(long, env = "JIRA_LINK_MAP_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "JIRA_LINK_MAP_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    init_logging(&log_config).wrap_err("Failed to initialize logging")?;

    let user_config = load_user_config(args.config.as_deref()).wrap_err_with(|| {
        format!(
            "Failed to load config{}",
            args.config
                .as_ref()
                .map_or_else(String::new, |p| format!(" from {}", p.display()))
        )
    })?;

    let catalog = Catalog::standard().with_custom(&user_config.link_types);
    catalog.validate().wrap_err("Invalid link type catalog")?;

    let phrases = user_config.resolve_phrases(&args.phrases, DEFAULT_UI_DESCRIPTIONS);
    info!(
        phrases = phrases.len(),
        link_types = catalog.len(),
        "Building link type mapping"
    );
    let mapping = build_mapping(&phrases, &catalog);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &mapping, args.format).wrap_err("Failed to write report")?;
    out.flush()?;
    Ok(())
}
