use crate::core_fs::error::FsError;
use crate::core_fs::filesystem::{join_path, DirEntry, FileSystem, WriteMode};
use async_trait::async_trait;
use log::{debug, error};
use std::path::{Component, Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Filesystem adapter rooted at the server home directory.
#[derive(Debug, Clone)]
pub struct LocalFs {
    home: PathBuf,
}

impl LocalFs {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Maps a logical path onto the disk, refusing anything that could climb
    /// out of the home directory.
    fn resolve(&self, path: &str) -> Result<PathBuf, FsError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FsError::OutsideHome(path.to_string()));
        }
        Ok(self.home.join(relative))
    }

    async fn read_entries(&self, dir: &str) -> Result<Vec<(String, u64)>, FsError> {
        let full = self.resolve(dir)?;
        let mut reader = fs::read_dir(&full)
            .await
            .map_err(|e| FsError::io(dir, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await.map_err(|e| FsError::io(dir, e))? {
            let size = entry.metadata().await.map(|m| m.len()).unwrap_or(0);
            entries.push((entry.file_name().to_string_lossy().into_owned(), size));
        }
        entries.sort();
        Ok(entries)
    }
}

#[async_trait]
impl FileSystem for LocalFs {
    async fn exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(full) => fs::metadata(full).await.is_ok(),
            Err(_) => false,
        }
    }

    async fn is_directory(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(full) => fs::metadata(full)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn list_names(&self, dir: &str) -> Result<Vec<String>, FsError> {
        let entries = self.read_entries(dir).await?;
        Ok(entries.into_iter().map(|(name, _)| name).collect())
    }

    async fn list_verbose(&self, dir: &str) -> Result<Vec<DirEntry>, FsError> {
        let entries = self.read_entries(dir).await?;
        Ok(entries
            .into_iter()
            .map(|(name, size)| DirEntry {
                path: join_path(dir, &name),
                name,
                size,
            })
            .collect())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let full = self.resolve(path)?;
        fs::read(&full).await.map_err(|e| {
            error!("Error reading file {:?}: {}", full, e);
            FsError::io(path, e)
        })
    }

    async fn file_size(&self, path: &str) -> Result<u64, FsError> {
        let full = self.resolve(path)?;
        let metadata = fs::metadata(&full)
            .await
            .map_err(|e| FsError::io(path, e))?;
        Ok(metadata.len())
    }

    async fn write(&self, path: &str, data: &[u8], mode: WriteMode) -> Result<(), FsError> {
        let full = self.resolve(path)?;
        let mut options = OpenOptions::new();
        match mode {
            WriteMode::New => options.write(true).create_new(true),
            WriteMode::Old => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };

        let mut file = options.open(&full).await.map_err(|e| {
            error!("Failed to open {:?} for writing ({:?}): {}", full, mode, e);
            FsError::io(path, e)
        })?;
        file.write_all(data).await.map_err(|e| FsError::io(path, e))?;
        file.flush().await.map_err(|e| FsError::io(path, e))?;

        debug!("Wrote {} bytes to {:?} ({:?})", data.len(), full, mode);
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), FsError> {
        let source = self.resolve(from)?;
        let destination = self.resolve(to)?;
        fs::rename(&source, &destination)
            .await
            .map_err(|e| FsError::io(from, e))
    }

    async fn delete(&self, path: &str) -> Result<bool, FsError> {
        let full = self.resolve(path)?;
        match fs::remove_file(&full).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FsError::io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn fixture() -> (TempDir, LocalFs) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("user1/temp")).unwrap();
        std::fs::write(dir.path().join("user1/file.txt"), "hello").unwrap();
        std::fs::write(dir.path().join("user1/file1.txt"), "").unwrap();
        std::fs::write(dir.path().join("user1/data.jpg"), [0u8, 1, 2, 3]).unwrap();
        let fs = LocalFs::new(dir.path());
        (dir, fs)
    }

    #[tokio::test]
    async fn test_exists_and_is_directory() {
        let (_dir, fs) = fixture().await;
        assert!(fs.exists("user1/file.txt").await);
        assert!(!fs.is_directory("user1/file.txt").await);
        assert!(fs.is_directory("user1/temp").await);
        assert!(fs.is_directory("user1/").await);
        assert!(!fs.exists("user1/missing.txt").await);
    }

    #[tokio::test]
    async fn test_parent_components_are_refused() {
        let (_dir, fs) = fixture().await;
        assert!(!fs.exists("user1/../user1/file.txt").await);
        assert!(matches!(
            fs.read("../etc/passwd").await,
            Err(FsError::OutsideHome(_))
        ));
    }

    #[tokio::test]
    async fn test_listing_is_sorted() {
        let (_dir, fs) = fixture().await;
        let names = fs.list_names("user1/").await.unwrap();
        assert_eq!(names, vec!["data.jpg", "file.txt", "file1.txt", "temp"]);

        let verbose = fs.list_verbose("user1").await.unwrap();
        assert_eq!(verbose[1].path, "user1/file.txt");
        assert_eq!(verbose[1].size, 5);
    }

    #[tokio::test]
    async fn test_write_modes() {
        let (dir, fs) = fixture().await;
        assert!(fs.write("user1/file.txt", b"x", WriteMode::New).await.is_err());

        fs.write("user1/file.txt", b"AB", WriteMode::Old).await.unwrap();
        fs.write("user1/file.txt", b"CD", WriteMode::Append).await.unwrap();
        fs.write("user1/new.txt", b"EF", WriteMode::New).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("user1/file.txt")).unwrap();
        assert_eq!(content, "ABCD");
        let content = std::fs::read_to_string(dir.path().join("user1/new.txt")).unwrap();
        assert_eq!(content, "EF");
    }

    #[tokio::test]
    async fn test_transfer_size_and_encoding() {
        let (_dir, fs) = fixture().await;
        assert_eq!(fs.transfer_size("user1/file.txt").await.unwrap(), 5);
        assert_eq!(fs.transfer_size("user1/data.jpg").await.unwrap(), 8);
        assert_eq!(fs.read_for_transfer("user1/file.txt").await.unwrap(), "hello");
        assert_eq!(fs.read_for_transfer("user1/data.jpg").await.unwrap(), "AAECAw==");
    }

    #[tokio::test]
    async fn test_unique_name_skips_taken_generations() {
        let (_dir, fs) = fixture().await;
        assert_eq!(
            fs.unique_name("file.txt", "user1/").await.unwrap(),
            "user1/file2.txt"
        );
        assert_eq!(
            fs.unique_name("other.txt", "user1/").await.unwrap(),
            "user1/other.txt"
        );
    }

    #[tokio::test]
    async fn test_rename_and_delete() {
        let (_dir, fs) = fixture().await;
        fs.rename("user1/file.txt", "user1/renamed.txt").await.unwrap();
        assert!(!fs.exists("user1/file.txt").await);
        assert!(fs.delete("user1/renamed.txt").await.unwrap());
        assert!(!fs.delete("user1/renamed.txt").await.unwrap());
    }
}
