use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

fn default_database() -> String {
    "shift.db".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_templates_dir() -> String {
    "templates".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            port: default_port(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl Config {
    /// Return the full path of the config file (next to the running process)
    pub fn config_file() -> PathBuf {
        PathBuf::from("shiftlogger.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }
}
