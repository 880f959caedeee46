mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used when file logging is enabled.
pub const LOG_FILENAME: &str = "jira-link-map.log";
/// Configuration for the logging system.
///
/// Console output always goes to stderr so the report on stdout is unaffected.
pub struct LogConfig {
    /// Directory for a rolling log file; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::WARN,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
