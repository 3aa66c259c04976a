//! Settings of the calculator: logging and subtraction behaviour.
//!
//! Read from a TOML document like
//! ```toml
//! [logging]
//! log_level = "debug"
//! log_to_console = true
//! log_to_file = true
//! log_file = "polycalc.log"
//!
//! [calculator]
//! subtraction = "negate"
//! prompt = "User: "
//! ```
//! Keys may also be written at the top level. Unknown keys are reported and ignored.
use crate::polynomial::poly_algebra::SubtractionMode;
use log::warn;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// Error types for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read config: {}", err),
            ConfigError::Toml(err) => write!(f, "Malformed config: {}", err),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value {} for key {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub log_level: LevelFilter,
    pub log_to_console: bool,
    pub log_to_file: bool,
    pub log_file: Option<String>,
    pub subtraction: SubtractionMode,
    pub prompt: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            log_level: LevelFilter::Warn,
            log_to_console: true,
            log_to_file: false,
            log_file: None,
            subtraction: SubtractionMode::Literal,
            prompt: "User: ".to_string(),
        }
    }
}

/// loglevel must be off, error, warn, info, debug or trace
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn invalid(key: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let table: Table = document.parse()?;
        let mut config = CalculatorConfig::default();
        for (key, value) in &table {
            match (key.as_str(), value) {
                ("calculator" | "logging", Value::Table(section)) => {
                    for (key, value) in section {
                        config.set(key, value)?;
                    }
                }
                _ => config.set(key, value)?,
            }
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), ConfigError> {
        match key {
            "log_level" => {
                self.log_level = value
                    .as_str()
                    .and_then(parse_log_level)
                    .ok_or_else(|| invalid(key, value))?;
            }
            "log_to_console" => {
                self.log_to_console = value.as_bool().ok_or_else(|| invalid(key, value))?;
            }
            "log_to_file" => {
                self.log_to_file = value.as_bool().ok_or_else(|| invalid(key, value))?;
            }
            "log_file" => {
                let name = value.as_str().ok_or_else(|| invalid(key, value))?;
                self.log_file = Some(name.to_string());
            }
            "subtraction" => {
                self.subtraction = value
                    .as_str()
                    .and_then(|mode| mode.parse::<SubtractionMode>().ok())
                    .ok_or_else(|| invalid(key, value))?;
            }
            "prompt" => {
                let prompt = value.as_str().ok_or_else(|| invalid(key, value))?;
                self.prompt = prompt.to_string();
            }
            _ => warn!("unknown config key '{}' ignored", key),
        }
        Ok(())
    }
}
