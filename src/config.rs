use serde::{Deserialize, Serialize};
use std::fs;

/// Ambient application configuration.
///
/// Only logging is configurable; the benchmark parameters themselves are
/// fixed constants in the binary. Loaded from `config/bench.yaml` when
/// present, otherwise defaulted - the harness takes no flags or
/// environment variables.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "boundsbench.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            enable_tracing: true,
        }
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "config/bench.yaml";

    /// Load the config file if one exists, falling back to defaults.
    pub fn load_or_default() -> Self {
        match fs::read_to_string(Self::DEFAULT_PATH) {
            Ok(content) => {
                serde_yaml::from_str(&content).expect("Failed to parse config yaml")
            }
            Err(_) => Self::default(),
        }
    }
}
