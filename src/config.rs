use chrono::Weekday;
use serde::Deserialize;

use crate::features::dashboard::state::DisplayMode;

const DASHBOARD_CONFIG_TOML: &str = include_str!("../assets/dashboard.toml");

fn default_page_size() -> usize {
    10
}

fn default_wide_breakpoint_px() -> u32 {
    1200
}

fn default_refetch_interval_secs() -> u32 {
    60
}

fn default_week_starts_on() -> String {
    "sunday".to_string()
}

fn default_task_highlight() -> String {
    "You got some task to do.".to_string()
}

fn default_initial_mode() -> String {
    "calendar".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_wide_breakpoint_px")]
    pub wide_breakpoint_px: u32,
    /// Zero disables the periodic refetch.
    #[serde(default = "default_refetch_interval_secs")]
    pub refetch_interval_secs: u32,
    #[serde(default = "default_week_starts_on")]
    pub week_starts_on: String,
    #[serde(default = "default_task_highlight")]
    pub task_highlight: String,
    #[serde(default = "default_initial_mode")]
    pub initial_mode: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            wide_breakpoint_px: default_wide_breakpoint_px(),
            refetch_interval_secs: default_refetch_interval_secs(),
            week_starts_on: default_week_starts_on(),
            task_highlight: default_task_highlight(),
            initial_mode: default_initial_mode(),
        }
    }
}

impl DashboardConfig {
    pub fn week_start(&self) -> Weekday {
        self.week_starts_on.parse::<Weekday>().unwrap_or(Weekday::Sun)
    }

    pub fn initial_display_mode(&self) -> DisplayMode {
        DisplayMode::from_name(&self.initial_mode).unwrap_or(DisplayMode::Calendar)
    }

    pub fn wide_media_query(&self) -> String {
        format!("(min-width:{}px)", self.wide_breakpoint_px)
    }
}

pub fn parse_dashboard_config(source: &str) -> Result<DashboardConfig, toml::de::Error> {
    let mut config = toml::from_str::<DashboardConfig>(source)?;
    sanitize_dashboard_config(&mut config);
    Ok(config)
}

fn sanitize_dashboard_config(config: &mut DashboardConfig) {
    if config.page_size == 0 {
        tracing::warn!("page_size must be positive; using default");
        config.page_size = default_page_size();
    }

    let week_start = config.week_starts_on.trim().to_ascii_lowercase();
    if week_start.parse::<Weekday>().is_err() {
        tracing::warn!(value = %config.week_starts_on, "unknown week_starts_on; using sunday");
        config.week_starts_on = default_week_starts_on();
    } else {
        config.week_starts_on = week_start;
    }

    if DisplayMode::from_name(&config.initial_mode).is_none() {
        tracing::warn!(value = %config.initial_mode, "unknown initial_mode; using calendar");
        config.initial_mode = default_initial_mode();
    }
}

/// Loads the embedded dashboard settings, falling back to defaults when they do not parse.
pub fn load_dashboard_config() -> DashboardConfig {
    match parse_dashboard_config(DASHBOARD_CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(
                page_size = config.page_size,
                wide_breakpoint_px = config.wide_breakpoint_px,
                refetch_interval_secs = config.refetch_interval_secs,
                "loaded dashboard config"
            );
            config
        }
        Err(error) => {
            tracing::error!(%error, "failed parsing dashboard config; using defaults");
            DashboardConfig::default()
        }
    }
}
