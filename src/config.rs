use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::carousel::RestartPolicy;
use crate::constants::*;
use crate::error::ConfigError;
use crate::routes::Route;

/// Art gallery kiosk.
#[derive(Debug, Parser)]
#[command(name = "gallery", version, about)]
pub struct Cli {
    /// Hero carousel auto-advance period in milliseconds
    #[arg(long, default_value_t = SLIDE_INTERVAL_MS)]
    pub interval_ms: u64,

    /// What a manual carousel action does to the pending auto-advance
    #[arg(long, value_enum, default_value_t = RestartPolicy::Restart)]
    pub restart_policy: RestartPolicy,

    /// Directory that site-relative image URLs are resolved against; remote
    /// images are cached under its `remote/` sub-directory
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Never download remote images, only use cached copies
    #[arg(long)]
    pub offline: bool,

    /// Page to open at start
    #[arg(long, default_value = "/")]
    pub route: String,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub slide_interval: Duration,
    pub restart_policy: RestartPolicy,
    pub assets_dir: Option<PathBuf>,
    pub offline: bool,
    pub start_route: Route,
    pub width: i32,
    pub height: i32,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if cli.width <= 0 || cli.height <= 0 {
            return Err(ConfigError::InvalidWindowSize { width: cli.width, height: cli.height });
        }
        if let Some(dir) = &cli.assets {
            if dir.exists() && !dir.is_dir() {
                return Err(ConfigError::AssetsNotDirectory(dir.clone()));
            }
        }

        Ok(Self {
            slide_interval: Duration::from_millis(cli.interval_ms),
            restart_policy: cli.restart_policy,
            assets_dir: cli.assets,
            offline: cli.offline,
            start_route: Route::parse(&cli.route),
            width: cli.width,
            height: cli.height,
            log_level: cli.log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slide_interval: Duration::from_millis(SLIDE_INTERVAL_MS),
            restart_policy: RestartPolicy::Restart,
            assets_dir: None,
            offline: false,
            start_route: Route::Home,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            log_level: "info".to_string(),
        }
    }
}
