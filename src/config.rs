use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::haplogroup::AscentStrategy;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub geocode: GeocodeConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_ascents")]
    pub max_ascents: u32,
    #[serde(default)]
    pub ancestor_inclusive: bool,
    #[serde(default)]
    pub strategy: AscentStrategy,
}

fn default_max_ascents() -> u32 {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ascents: default_max_ascents(),
            ancestor_inclusive: false,
            strategy: AscentStrategy::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodeConfig {
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("haplomap/{}", env!("CARGO_PKG_VERSION"))
}

fn default_endpoint() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "haplomap", "haplomap") {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "haplomap", "haplomap") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let content = toml::to_string_pretty(self)?;
            fs::write(config_dir.join("config.toml"), content)?;
        }
        Ok(())
    }
}
