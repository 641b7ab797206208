#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ReadPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "../data/in_file.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "../data/out_file.txt";
pub const MAX_WORKER_THREADS: usize = 1024;

/// 合併預設值、設定檔與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub output_path: String,
    pub read_policy: ReadPolicy,
    pub worker_threads: Option<usize>,
    pub monitor: bool,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            read_policy: ReadPolicy::default(),
            worker_threads: None,
            monitor: false,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    pub fn from_provider<C: ConfigProvider>(config: &C) -> Self {
        Self {
            input_path: config.input_path().to_string(),
            output_path: config.output_path().to_string(),
            read_policy: config.read_policy(),
            worker_threads: config.worker_threads(),
            monitor: config.monitor_enabled(),
            log_format: config.log_format(),
        }
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn read_policy(&self) -> ReadPolicy {
        self.read_policy
    }

    fn worker_threads(&self) -> Option<usize> {
        self.worker_threads
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("io.input_path", &self.input_path)?;
        validation::validate_path("io.output_path", &self.output_path)?;
        validation::validate_distinct_paths("io.output_path", &self.input_path, &self.output_path)?;

        if let Some(threads) = self.worker_threads {
            validation::validate_range("reverse.worker_threads", threads, 1, MAX_WORKER_THREADS)?;
        }

        Ok(())
    }
}
