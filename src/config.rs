use crate::constants::{DEFAULT_HOME_DIR, DEFAULT_LISTEN_PORT, DEFAULT_USER_DB};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_address: String,
    pub listen_port: u16,
    pub home_dir: String,
    pub user_db: String,
    pub max_clients: Option<usize>, // None or 0 means unlimited
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: String::from("0.0.0.0"),
            listen_port: DEFAULT_LISTEN_PORT,
            home_dir: String::from(DEFAULT_HOME_DIR),
            user_db: String::from(DEFAULT_USER_DB),
            max_clients: None,
        }
    }
}

impl ServerConfig {
    /// Whether one more client fits, given how many are connected already.
    pub fn accepts_client(&self, active_clients: usize) -> bool {
        match self.max_clients {
            None | Some(0) => true,
            Some(max) => active_clients < max,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::parse(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn log(&self) {
        info!(
            "  Listen Address: {}:{}",
            self.server.listen_address, self.server.listen_port
        );
        info!("  Home Directory: {}", self.server.home_dir);
        info!("  User Database: {}", self.server.user_db);
        match self.server.max_clients {
            None | Some(0) => info!("  Max Clients: unlimited"),
            Some(max) => info!("  Max Clients: {}", max),
        }
    }
}
