use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line flags; each one overrides `config.toml`.
#[derive(Debug, Parser)]
#[command(
    name = "inkwell",
    version,
    about = "A terminal client for writing and reading a blog",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the blog API.
    #[arg(long, env = "INKWELL_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Route to open on start, e.g. `/admin` or `/admin/posts/my-post`.
    #[arg(short, long, value_name = "PATH")]
    pub route: Option<String>,
}
