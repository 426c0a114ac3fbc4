use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "rouillesftpd", about = "An RFC 913 SFTP server written in Rust.")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Port to listen on, overrides the configuration file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding one folder per user, overrides the configuration file
    #[arg(long)]
    pub home_dir: Option<String>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rouillesftpd"]);
        assert!(cli.config.is_empty());
        assert_eq!(cli.port, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "rouillesftpd",
            "-c",
            "etc/rouillesftpd.conf",
            "-p",
            "7000",
            "--home-dir",
            "/srv/sftp",
            "-v",
        ]);
        assert_eq!(cli.config, "etc/rouillesftpd.conf");
        assert_eq!(cli.port, Some(7000));
        assert_eq!(cli.home_dir.as_deref(), Some("/srv/sftp"));
        assert!(cli.verbose);
    }
}
