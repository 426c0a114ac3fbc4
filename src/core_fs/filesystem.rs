use crate::constants::TEXT_EXTENSIONS;
use crate::core_fs::error::FsError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// How a file travels over the control connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Text,
    Binary,
}

impl FileType {
    /// Classifies by extension only.
    pub fn of(path: &str) -> Self {
        let extension = path.rsplit('/').next().and_then(|name| {
            name.rsplit_once('.').map(|(_, extension)| extension)
        });
        match extension {
            Some(ext) if TEXT_EXTENSIONS.contains(&ext) => FileType::Text,
            _ => FileType::Binary,
        }
    }
}

/// How a stored payload is written to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create; the destination must not exist.
    New,
    /// Create or overwrite.
    Old,
    /// Append, creating the file if needed.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
}

/// Appends `name` to `dir`, inserting a `/` only when `dir` lacks one.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Length of the padded Base64 encoding of `byte_len` bytes.
pub fn base64_length(byte_len: u64) -> u64 {
    ((4 * byte_len / 3) + 3) & !3
}

/// Storage used by sessions. Paths are `/`-separated and relative to the
/// server home directory, e.g. `user1/folder1/file.txt`.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn exists(&self, path: &str) -> bool;

    async fn is_directory(&self, path: &str) -> bool;

    /// Entry names in `dir`, sorted.
    async fn list_names(&self, dir: &str) -> Result<Vec<String>, FsError>;

    /// Entries in `dir` with their logical path and size, sorted by name.
    async fn list_verbose(&self, dir: &str) -> Result<Vec<DirEntry>, FsError>;

    async fn read(&self, path: &str) -> Result<Vec<u8>, FsError>;

    async fn file_size(&self, path: &str) -> Result<u64, FsError>;

    async fn write(&self, path: &str, data: &[u8], mode: WriteMode) -> Result<(), FsError>;

    async fn rename(&self, from: &str, to: &str) -> Result<(), FsError>;

    /// Returns false when there was nothing to delete.
    async fn delete(&self, path: &str) -> Result<bool, FsError>;

    fn classify(&self, path: &str) -> FileType {
        FileType::of(path)
    }

    /// Number of bytes SEND will put on the wire for `path`.
    async fn transfer_size(&self, path: &str) -> Result<u64, FsError> {
        let size = self.file_size(path).await?;
        Ok(match self.classify(path) {
            FileType::Text => size,
            FileType::Binary => base64_length(size),
        })
    }

    /// File contents as sent by SEND: text as is, binary as Base64.
    async fn read_for_transfer(&self, path: &str) -> Result<String, FsError> {
        let bytes = self.read(path).await?;
        Ok(match self.classify(path) {
            FileType::Text => String::from_utf8_lossy(&bytes).into_owned(),
            FileType::Binary => STANDARD.encode(bytes),
        })
    }

    /// Finds a free name for `base` inside `dir` by numbering it before the
    /// extension: `file.txt`, `file1.txt`, `file2.txt`...
    async fn unique_name(&self, base: &str, dir: &str) -> Result<String, FsError> {
        let taken = self.list_names(dir).await?;
        let (stem, extension) = match base.rsplit_once('.') {
            Some((stem, extension)) => (stem, Some(extension)),
            None => (base, None),
        };

        let mut candidate = base.to_string();
        let mut generation = 1u64;
        while taken.iter().any(|name| *name == candidate) {
            candidate = match extension {
                Some(extension) => format!("{}{}.{}", stem, generation, extension),
                None => format!("{}{}", stem, generation),
            };
            generation += 1;
        }

        Ok(join_path(dir, &candidate))
    }
}
