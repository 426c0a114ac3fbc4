// src/constants.rs

pub const SERVER_PROTOCOL: &str = "RFC 913 SFTP";
pub const DEFAULT_LISTEN_PORT: u16 = 6789;
pub const DEFAULT_HOME_DIR: &str = "resources/home";
pub const DEFAULT_USER_DB: &str = "resources/users.txt";

/// Marks the end of every server response on the wire.
pub const MESSAGE_TERMINATOR: char = '\0';

/// Header and divider rows at the top of the user database.
pub const USER_DB_HEADER_LINES: usize = 2;

/// Extensions served as plain text, everything else goes out as Base64.
pub const TEXT_EXTENSIONS: [&str; 2] = ["txt", "csv"];
