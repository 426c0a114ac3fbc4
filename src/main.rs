mod config;
mod constants;
mod core_auth;
mod core_cli;
mod core_fs;
mod core_log;
mod core_network;
mod core_sftpcommand;
mod response;
mod server;
mod session;

#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::core_cli::Cli;
use crate::core_log::init_logger;
use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "etc/rouillesftpd.conf";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    init_logger(args.verbose);

    // Load configuration from the TOML file, falling back to built-in defaults
    let mut config = if !args.config.is_empty() {
        Config::load_from_file(&args.config)?
    } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
        Config::load_from_file(DEFAULT_CONFIG_PATH)?
    } else {
        warn!(
            "No configuration file at {}, using defaults",
            DEFAULT_CONFIG_PATH
        );
        Config::default()
    };

    // CLI overrides
    if let Some(port) = args.port {
        config.server.listen_port = port;
    }
    if let Some(home_dir) = args.home_dir {
        config.server.home_dir = home_dir;
    }

    info!("Starting rouillesftpd with:");
    config.log();

    server::run(config).await
}
