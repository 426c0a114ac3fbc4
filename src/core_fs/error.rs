// Errors raised by the filesystem adapter
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is outside of the home directory")]
    OutsideHome(String),
}

impl FsError {
    pub fn io(path: &str, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.to_string(),
            source,
        }
    }
}
