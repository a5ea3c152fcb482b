//! Turning picked or dropped files into upload payloads

use crate::types::FilePayload;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a file to upload came from
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// Chosen through the file dialog
    Picked(PathBuf),
    /// Dropped onto the window; native drops carry a path, others carry bytes
    Dropped {
        name: String,
        path: Option<PathBuf>,
        bytes: Option<Arc<[u8]>>,
    },
}

impl UploadSource {
    /// First usable file of a drop, if any
    pub fn from_dropped(files: &[egui::DroppedFile]) -> Option<Self> {
        let file = files.first()?;
        if file.path.is_none() && file.bytes.is_none() {
            return None;
        }
        Some(UploadSource::Dropped {
            name: file.name.clone(),
            path: file.path.clone(),
            bytes: file.bytes.clone(),
        })
    }

    /// Display name; the file name for path-backed sources.
    pub fn name(&self) -> String {
        match self {
            UploadSource::Picked(path) => file_name(path),
            UploadSource::Dropped { path: Some(path), .. } => file_name(path),
            UploadSource::Dropped { name, .. } => name.clone(),
        }
    }

    pub async fn into_payload(self) -> std::io::Result<FilePayload> {
        let name = self.name();
        let bytes = match self {
            UploadSource::Picked(path) | UploadSource::Dropped { path: Some(path), .. } => {
                tokio::fs::read(&path).await?
            }
            UploadSource::Dropped { bytes: Some(bytes), .. } => bytes.to_vec(),
            UploadSource::Dropped { .. } => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "dropped file has no contents",
                ))
            }
        };
        Ok(FilePayload { name, bytes })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropped(name: &str, path: Option<PathBuf>, bytes: Option<&[u8]>) -> egui::DroppedFile {
        egui::DroppedFile {
            name: name.to_string(),
            path,
            bytes: bytes.map(Arc::from),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn picked_and_dropped_files_give_identical_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.txt");
        std::fs::write(&path, b"party A agrees").unwrap();

        let picked = UploadSource::Picked(path.clone()).into_payload().await.unwrap();
        let drop = UploadSource::from_dropped(&[dropped("", Some(path.clone()), None)]).unwrap();
        let dropped = drop.into_payload().await.unwrap();

        assert_eq!(picked, dropped);
        assert_eq!(picked.name, "contract.txt");
        assert_eq!(picked.bytes, b"party A agrees");
    }

    #[tokio::test]
    async fn in_memory_drop_uses_its_bytes() {
        let source = UploadSource::from_dropped(&[dropped("notes.txt", None, Some(b"hi"))]).unwrap();
        let payload = source.into_payload().await.unwrap();
        assert_eq!(payload, FilePayload { name: "notes.txt".into(), bytes: b"hi".to_vec() });
    }

    #[test]
    fn only_first_dropped_file_is_used() {
        let files = [
            dropped("a.txt", None, Some(b"a")),
            dropped("b.txt", None, Some(b"b")),
        ];
        let source = UploadSource::from_dropped(&files).unwrap();
        assert_eq!(source.name(), "a.txt");
    }

    #[test]
    fn empty_drop_is_ignored() {
        assert!(UploadSource::from_dropped(&[]).is_none());
        assert!(UploadSource::from_dropped(&[dropped("ghost", None, None)]).is_none());
    }
}
