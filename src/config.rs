use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MeowError, Result};
use crate::services::parser::DEFAULT_BODY_LIMIT;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7878;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_body_bytes: Option<u64>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| MeowError::Config(e.to_string()))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| MeowError::Config(e.to_string()))?;
        if config.max_body_bytes == Some(0) {
            return Err(MeowError::Config(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn host(&self) -> &str {
        self.host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn max_body_bytes(&self) -> u64 {
        self.max_body_bytes.unwrap_or(DEFAULT_BODY_LIMIT)
    }
}
