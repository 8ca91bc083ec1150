use crate::dataset::SamplingMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_GATEWAY: &str = "gateway.pinata.cloud";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    pub host: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SamplingConfig {
    pub mode: Option<SamplingMode>,
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".gradecast").join("config.toml"))
    }

    /// Gateway host after applying the built-in default
    pub fn gateway_host(&self) -> &str {
        self.gateway.host.as_deref().unwrap_or(DEFAULT_GATEWAY)
    }

    /// Sampling mode after applying the built-in default
    pub fn sampling_mode(&self) -> SamplingMode {
        self.sampling.mode.unwrap_or(SamplingMode::RandomWithReplacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gateway_host(), DEFAULT_GATEWAY);
        assert_eq!(config.sampling_mode(), SamplingMode::RandomWithReplacement);
    }

    #[test]
    fn test_parse_overrides() {
        let config: Config = toml::from_str(
            "[gateway]\nhost = \"ipfs.io\"\n\n[sampling]\nmode = \"first_n\"\n",
        )
        .unwrap();
        assert_eq!(config.gateway_host(), "ipfs.io");
        assert_eq!(config.sampling_mode(), SamplingMode::FirstN);
    }
}
