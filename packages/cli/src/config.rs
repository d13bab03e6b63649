use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "modelgen.config.json";

/// modelgen configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing model .json files
    #[serde(default = "default_model_dir")]
    pub model_dir: String,

    /// Directory generated files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Generators to run, by registered name
    #[serde(default = "default_generators")]
    pub generators: Vec<String>,

    /// Overrides the version label of every model document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Overrides the namespace of every model document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

fn default_model_dir() -> String {
    "model".to_string()
}

fn default_out_dir() -> String {
    "generated".to_string()
}

fn default_generators() -> Vec<String> {
    vec!["Sample".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to model directory
    pub fn get_model_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.model_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            out_dir: default_out_dir(),
            generators: default_generators(),
            version: None,
            namespace: None,
        }
    }
}
