use crate::config::Config;
use crate::core_auth::{UserDatabase, UserRegistry};
use crate::core_fs::{FileSystem, LocalFs};
use crate::core_network::network;
use anyhow::{bail, Context, Result};
use log::{error, info};
use std::path::Path;
use std::sync::Arc;

/// Collaborators shared by every session: the user registry and the
/// filesystem adapter. Cheap to clone, one clone per connection.
#[derive(Clone)]
pub struct ServerContext {
    pub registry: Arc<dyn UserRegistry>,
    pub fs: Arc<dyn FileSystem>,
}

impl ServerContext {
    pub fn new(registry: Arc<dyn UserRegistry>, fs: Arc<dyn FileSystem>) -> Self {
        Self { registry, fs }
    }

    /// Loads the user database and roots the filesystem adapter at the
    /// configured home directory.
    pub fn from_config(config: &Config) -> Result<Self> {
        let home_dir = Path::new(&config.server.home_dir);
        if !home_dir.is_dir() {
            bail!("Home directory {} does not exist", home_dir.display());
        }

        let users = UserDatabase::load_from_file(Path::new(&config.server.user_db))
            .with_context(|| format!("Failed to load users from {}", config.server.user_db))?;
        if users.is_empty() {
            info!("User database {} defines no users", config.server.user_db);
        }

        Ok(Self::new(Arc::new(users), Arc::new(LocalFs::new(home_dir))))
    }
}

/// Runs the SFTP server with the provided configuration.
///
/// Returns only if the listener cannot be set up; individual connection
/// failures are logged and never stop the server.
pub async fn run(config: Config) -> Result<()> {
    info!("Starting server with config: {:?}", config);

    let ctx = ServerContext::from_config(&config)?;

    match network::start_server(Arc::new(config), ctx).await {
        Ok(_) => info!("Server stopped."),
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_config_requires_home_dir() {
        let mut config = Config::default();
        config.server.home_dir = "/nonexistent/home".to_string();
        assert!(ServerContext::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_loads_users() {
        let dir = TempDir::new().unwrap();
        let users = dir.path().join("users.txt");
        std::fs::write(&users, "id|accounts|password\n--\nuser1| | \n").unwrap();

        let mut config = Config::default();
        config.server.home_dir = dir.path().display().to_string();
        config.server.user_db = users.display().to_string();

        let ctx = ServerContext::from_config(&config).unwrap();
        assert!(ctx.registry.lookup("user1").is_some());
    }
}
