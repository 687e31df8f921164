pub mod toml_config;

use crate::adapters::numbers_api::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const MIN_FACT_TIMEOUT_SECS: u64 = 1;
pub const MAX_FACT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP API that classifies the mathematical properties of an integer")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub fact_api_base: String,

    #[arg(long, default_value = "3", help = "Timeout for the fun fact request")]
    pub fact_timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            fact_api_base: DEFAULT_BASE_URL.to_string(),
            fact_timeout_secs: 3,
            config: None,
            log_json: false,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// 若有指定 `--config`，以檔案內容覆蓋命令列預設值
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            let file_config = TomlConfig::from_file(&path)?;
            file_config.apply_to(&mut self);
        }
        Ok(self)
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn fact_api_base(&self) -> &str {
        &self.fact_api_base
    }

    fn fact_timeout(&self) -> Duration {
        Duration::from_secs(self.fact_timeout_secs)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_url("fact_api_base", &self.fact_api_base)?;
        validate_range(
            "fact_timeout_secs",
            self.fact_timeout_secs,
            MIN_FACT_TIMEOUT_SECS,
            MAX_FACT_TIMEOUT_SECS,
        )?;
        Ok(())
    }
}
