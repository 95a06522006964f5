use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub db_path: PathBuf,
    /// Actor ids granted the edit permission; `*` grants everyone.
    pub editors: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4017".to_string());

        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let db_path: PathBuf = env::var("CONTACTUS_DB_PATH")
            .unwrap_or_else(|_| "contactus.db".to_string())
            .into();

        // No editors configured means the form renders read-only for everyone.
        let editors = parse_editors(&env::var("CONTACTUS_EDITORS").unwrap_or_default());

        Ok(Config {
            port,
            cors_origin,
            db_path,
            editors,
        })
    }
}

/// Parse the comma-separated editor allow-list
pub fn parse_editors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
