//! File sink: writes artifacts straight to their destination path.
//!
//! Existing files are truncated and overwritten in place. Parent
//! directories are not created.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::{Sink, WriteError};
use crate::domain::Artifact;

/// Permission bits for written files (rw-r--r--)
pub const FILE_MODE: u32 = 0o644;

/// Sink writing to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }

    async fn write(artifact: &Artifact, destination: &Path) -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options.open(destination).await?;
        file.write_all(artifact.as_bytes()).await?;
        file.flush().await?;

        // mode() only applies on creation and is masked by the umask
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(destination, std::fs::Permissions::from_mode(FILE_MODE))
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Sink for FileSink {
    async fn persist(&self, artifact: &Artifact, destination: &Path) -> Result<(), WriteError> {
        Self::write(artifact, destination)
            .await
            .map_err(|source| WriteError {
                path: destination.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_persist_round_trip() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("pune.png");
        let bytes: Vec<u8> = (0..=255u8).collect();

        FileSink::new()
            .persist(&Artifact::new(bytes.clone()), &dest)
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&dest).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_persist_overwrites_longer_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("pune.png");
        tokio::fs::write(&dest, b"previous much longer content")
            .await
            .unwrap();

        FileSink::new()
            .persist(&Artifact::new(b"new".to_vec()), &dest)
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&dest).await.unwrap(), b"new");
    }

    #[test]
    fn test_persist_empty_artifact() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("empty.png");

        tokio_test::block_on(FileSink::new().persist(&Artifact::new(Vec::new()), &dest)).unwrap();

        assert_eq!(std::fs::metadata(&dest).unwrap().len(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_persist_sets_mode_0644() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("mode.png");

        FileSink::new()
            .persist(&Artifact::new(b"x".to_vec()), &dest)
            .await
            .unwrap();

        let mode = std::fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, FILE_MODE);
    }

    #[tokio::test]
    async fn test_missing_directory_is_write_error() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("no-such-dir").join("out.png");

        let err = FileSink::new()
            .persist(&Artifact::new(b"x".to_vec()), &dest)
            .await
            .unwrap_err();

        assert_eq!(err.path, dest);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert!(!dest.exists());
    }
}
