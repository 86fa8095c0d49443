use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loader::DataFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    #[serde(default)]
    pub seed_paths: Vec<String>,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            seed_paths: Vec::new(),
            log_filter: default_log_filter(),
            pretty: default_pretty(),
        }
    }
}

impl ManagerConfig {
    pub fn load_from_dir(root: &Path) -> Self {
        let config_paths = [
            root.join(".doc-manager.json"),
            root.join("doc-manager.config.json"),
            root.join(".doc-manager.yaml"),
        ];

        for config_path in config_paths {
            let Ok(content) = std::fs::read_to_string(&config_path) else {
                continue;
            };
            match DataFormat::from_path(&config_path).parse::<ManagerConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {:?}", config_path);
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {:?}: {}", config_path, e);
                }
            }
        }

        tracing::info!("Using default config");
        Self::default()
    }

    /// Reads an explicitly named config file. Unlike `load_from_dir`, a
    /// missing or malformed file is an error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = DataFormat::from_path(path).parse(&content)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

fn default_log_filter() -> String {
    "doc_manager=info".to_string()
}

fn default_pretty() -> bool {
    true
}
