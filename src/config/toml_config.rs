use crate::config::{Settings, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::domain::model::ReadPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReverserError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub io: IoConfig,
    pub reverse: Option<ReverseConfig>,
    pub monitoring: Option<MonitoringConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IoConfig {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub read_policy: Option<ReadPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseConfig {
    pub worker_threads: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReverserError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReverserError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReverserError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.io.input_path.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn output_path(&self) -> &str {
        self.io.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn read_policy(&self) -> ReadPolicy {
        self.io.read_policy.unwrap_or_default()
    }

    fn worker_threads(&self) -> Option<usize> {
        self.reverse.as_ref().and_then(|r| r.worker_threads)
    }

    fn monitor_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        Settings::from_provider(self).validate()
    }
}
