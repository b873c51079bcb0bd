use crate::config::model::{Config, DebugConfig};
use std::env;
use std::time::Duration;

pub fn load_config() -> Config {
    let dataset_dir = env::var("DATASET_DIR").unwrap_or_else(|_| "dataset".to_string());
    let page_size = load_u32_config("PAGE_SIZE", 100);
    let request_interval_secs = load_u64_config("REQUEST_INTERVAL_SECS", 5);
    let save_monthly_snapshot = load_bool_config("SAVE_MONTHLY_SNAPSHOT", false);

    let debug_event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    if page_size == 0 {
        panic!("Invalid config 'PAGE_SIZE'. Expected a positive integer number.");
    }

    Config {
        dataset_dir: dataset_dir.into(),
        page_size,
        request_interval: Duration::from_secs(request_interval_secs),
        save_monthly_snapshot,
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
    }
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_u32_config(name: &str, default: u32) -> u32 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name))
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name))
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => {
            Some(value.parse().unwrap_or_else(|_| {
                panic!("Invalid config '{}'. Expected an integer number.", name)
            }))
        }
        Err(_) => None,
    }
}
