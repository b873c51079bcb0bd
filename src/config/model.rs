use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_dir: PathBuf,
    pub page_size: u32,
    pub request_interval: Duration,
    pub save_monthly_snapshot: bool,
    pub debug_config: DebugConfig,
}

#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub event_limit: Option<usize>,
}
