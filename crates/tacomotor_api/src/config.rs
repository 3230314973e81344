//! Server configuration read from `TACO_MOTOR_*` environment variables.
//!
//! Empty or whitespace-only values count as unset.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use tacomotor_core::{default_log_level, ResetOptions};

pub const HOST_VAR: &str = "TACO_MOTOR_HOST";
pub const PORT_VAR: &str = "TACO_MOTOR_PORT";
pub const DB_PATH_VAR: &str = "TACO_MOTOR_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "TACO_MOTOR_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "TACO_MOTOR_LOG_DIR";
pub const SEED_ON_RESET_VAR: &str = "TACO_MOTOR_SEED_ON_RESET";
pub const WORKERS_VAR: &str = "TACO_MOTOR_WORKERS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DB_FILE_NAME: &str = "taco_motor.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "invalid {key}=`{value}`: expected {expected}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file, or `:memory:`.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute log directory; `None` logs to stderr.
    pub log_dir: Option<String>,
    pub reset: ResetOptions,
    /// HTTP worker count; `None` keeps the actix default.
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match read(PORT_VAR) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: PORT_VAR,
                value: raw,
                expected: "a port number between 0 and 65535",
            })?,
            None => DEFAULT_PORT,
        };

        let workers = match read(WORKERS_VAR) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(count) if count > 0 => Some(count),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: WORKERS_VAR,
                        value: raw,
                        expected: "a positive integer",
                    })
                }
            },
            None => None,
        };

        let seed_demo_data = match read(SEED_ON_RESET_VAR) {
            Some(raw) => parse_flag(SEED_ON_RESET_VAR, raw)?,
            None => false,
        };

        Ok(Self {
            host: read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            db_path: read(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR),
            reset: ResetOptions { seed_demo_data },
            workers,
        })
    }
}

fn parse_flag(key: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            expected: "one of true|false|1|0|yes|no|on|off",
        }),
    }
}
