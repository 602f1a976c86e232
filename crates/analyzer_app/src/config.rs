use std::fs;
use std::path::Path;

use analyzer_logging::{analyzer_info, analyzer_warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILENAME: &str = ".analyzer_config.ron";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedConfig {
    base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
        }
    }
}

/// Load the backend config from the current directory, falling back to the
/// default local backend on any read or parse problem.
pub fn load_config() -> AppConfig {
    load_config_from(Path::new("."))
}

fn load_config_from(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            analyzer_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    let persisted: PersistedConfig = match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            analyzer_warn!("Failed to parse config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match Url::parse(&persisted.base_url) {
        Ok(base_url) => {
            analyzer_info!("Loaded backend config from {:?}", path);
            AppConfig { base_url }
        }
        Err(err) => {
            analyzer_warn!("Invalid base_url in {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
