use std::{env, path::PathBuf};

use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cli::Cli;

const DEFAULT_TICK_RATE: f64 = 4.0;
const DEFAULT_FRAME_RATE: f64 = 30.0;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// How calls are handed to the operating system.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DialerConfig {
    /// URL handler to launch instead of the platform default
    /// (`xdg-open`, `open`, `cmd /C start`).
    #[serde(default)]
    pub command: Option<String>,
    /// Scheme of the dial address, `tel` unless configured otherwise.
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for DialerConfig {
    fn default() -> Self {
        Self {
            command: None,
            scheme: default_scheme(),
        }
    }
}

fn default_scheme() -> String {
    directory::dial::DEFAULT_SCHEME.to_string()
}

fn default_tick_rate() -> f64 {
    DEFAULT_TICK_RATE
}

fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    #[serde(default)]
    pub dialer: DialerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig {
                data_dir: get_data_dir(),
                config_dir: get_config_dir(),
            },
            tick_rate: DEFAULT_TICK_RATE,
            frame_rate: DEFAULT_FRAME_RATE,
            dialer: DialerConfig::default(),
        }
    }
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

impl Config {
    /// Defaults, then `config.json5` / `config.toml` from the config dir.
    pub fn new() -> Result<Self, config::ConfigError> {
        let data_dir = get_data_dir();
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            debug!(
                "no configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.sanitize();
        Ok(cfg)
    }

    /// CLI flags win over file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(rate) = cli.tick_rate {
            self.tick_rate = rate;
        }
        if let Some(rate) = cli.frame_rate {
            self.frame_rate = rate;
        }
        self.sanitize();
    }

    // Rates feed `Duration::from_secs_f64(1.0 / rate)`
    fn sanitize(&mut self) {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            warn!("invalid tick_rate {}, using {DEFAULT_TICK_RATE}", self.tick_rate);
            self.tick_rate = DEFAULT_TICK_RATE;
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            warn!("invalid frame_rate {}, using {DEFAULT_FRAME_RATE}", self.frame_rate);
            self.frame_rate = DEFAULT_FRAME_RATE;
        }
        if self.dialer.scheme.trim().is_empty() {
            self.dialer.scheme = default_scheme();
        }
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "helpline", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_use_tel_scheme() {
        let cfg = Config::default();
        assert_eq!(cfg.dialer.scheme, "tel");
        assert!(cfg.dialer.command.is_none());
        assert_eq!(cfg.tick_rate, DEFAULT_TICK_RATE);
    }

    #[test]
    fn cli_overrides_rates() {
        let mut cfg = Config::default();
        let cli = Cli::parse_from(["helpline", "--tick-rate", "10", "--frame-rate", "60"]);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.tick_rate, 10.0);
        assert_eq!(cfg.frame_rate, 60.0);
    }

    #[test]
    fn non_positive_rates_fall_back_to_defaults() {
        let mut cfg = Config::default();
        let cli = Cli::parse_from(["helpline", "--tick-rate", "0", "--frame-rate=-5"]);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(cfg.frame_rate, DEFAULT_FRAME_RATE);
    }

    #[test]
    fn dialer_section_deserializes_from_toml() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "tick_rate = 2.0\n[dialer]\ncommand = \"my-dialer\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("deserialize");
        assert_eq!(cfg.tick_rate, 2.0);
        assert_eq!(cfg.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(cfg.dialer.command.as_deref(), Some("my-dialer"));
        assert_eq!(cfg.dialer.scheme, "tel");
    }
}
