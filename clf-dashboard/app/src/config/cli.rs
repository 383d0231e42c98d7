use super::{ConfigError, LogLevel};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Access log to read
    #[arg(long, env = "LOG_PATH", default_value = "/var/log/nginx/access.log")]
    pub log_path: PathBuf,

    /// Dashboard HTTP port
    #[arg(long, env = "HTTP_PORT", default_value = "9700")]
    pub http_port: u16,

    /// Number of generated lines when the access log is unavailable
    #[arg(long, env = "SAMPLE_SIZE", default_value = "10000")]
    pub sample_size: usize,

    /// Seed for reproducible sample data
    #[arg(long, env = "SAMPLE_SEED")]
    pub sample_seed: Option<u64>,

    /// Entries in the dashboard's top-IP and top-path lists
    #[arg(long, env = "TOP_N", default_value = "5")]
    pub top_n: usize,

    /// Default rows per table page
    #[arg(long, env = "PAGE_SIZE", default_value = "10")]
    pub page_size: usize,

    /// Largest page size a client may request
    #[arg(long, env = "MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: usize,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("/var/log/nginx/access.log"),
            http_port: 9700,
            sample_size: 10_000,
            sample_seed: None,
            top_n: 5,
            page_size: 10,
            max_page_size: 100,
            log_level: LogLevel::Info,
            config_file: None,
        }
    }
}

impl Config {
    /// Parse arguments (with env fallbacks) without consulting a config file.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::parse_from(args);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Arguments and env first; the config file fills in whatever they left
    /// at its default.
    pub fn from_args_and_file<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::parse_from(args);

        if let Some(path) = config.config_file.clone() {
            let content = std::fs::read_to_string(&path)?;
            let file_config: Config = toml::from_str(&content)?;
            config.merge_defaults_from(file_config);
        }

        config.validate()?;
        Ok(config)
    }

    fn merge_defaults_from(&mut self, base: Config) {
        let defaults = Config::default();

        merge_field(&mut self.log_path, base.log_path, &defaults.log_path);
        merge_field(&mut self.http_port, base.http_port, &defaults.http_port);
        merge_field(&mut self.sample_size, base.sample_size, &defaults.sample_size);
        merge_field(&mut self.sample_seed, base.sample_seed, &defaults.sample_seed);
        merge_field(&mut self.top_n, base.top_n, &defaults.top_n);
        merge_field(&mut self.page_size, base.page_size, &defaults.page_size);
        merge_field(
            &mut self.max_page_size,
            base.max_page_size,
            &defaults.max_page_size,
        );
        merge_field(&mut self.log_level, base.log_level, &defaults.log_level);
    }
}

fn merge_field<T: PartialEq>(current: &mut T, base: T, default: &T) {
    if *current == *default && base != *default {
        *current = base;
    }
}
