use crate::config::{Settings, TomlConfig};
use crate::domain::model::ReadPolicy;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "line-reverser")]
#[command(about = "Reverse every line of a text file and append the result to another file")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input file, overrides [io] input_path
    #[arg(long)]
    pub input: Option<String>,

    /// Output file, overrides [io] output_path
    #[arg(long)]
    pub output: Option<String>,

    /// Keep blank lines and read until the end of the input
    #[arg(long)]
    pub read_all: bool,

    /// Number of reversal worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// 預設值 < 設定檔 < 命令列
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_provider(&TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(input) = &self.input {
            settings.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if self.read_all {
            settings.read_policy = ReadPolicy::UntilEof;
        }
        if self.threads.is_some() {
            settings.worker_threads = self.threads;
        }
        if self.monitor {
            settings.monitor = true;
        }
        if let Some(format) = self.log_format {
            settings.log_format = format;
        }

        Ok(settings)
    }
}
