// Storage primitives behind the session: everything that touches the disk

pub mod error;
pub mod filesystem;
pub mod local;

pub use filesystem::{join_path, FileSystem, WriteMode};
pub use local::LocalFs;
