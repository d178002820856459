use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

use crate::cart::helpers::get_or_create_cart_id;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub menu_path: PathBuf,
    /// Id of the session's cart
    pub cart_id: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let menu_path = std::env::var("MENU_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config/menu.json"));
        if menu_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingVar("MENU_PATH".to_string()));
        }

        let cart_id = get_or_create_cart_id(std::env::var("CART_ID").ok());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            menu_path,
            cart_id,
            log_level,
        })
    }
}
