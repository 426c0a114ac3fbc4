// Errors raised while loading the user database
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read user database {path}: {source}")]
    UserDbReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed user database row {line}: {row}")]
    MalformedRow { line: usize, row: String },

    #[error("Duplicate user-id in user database: {0}")]
    DuplicateUser(String),
}
