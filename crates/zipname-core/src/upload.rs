//! Host-side intake: uploaded files and the upload size guard.

use std::path::Path;

use thiserror::Error;

/// Default upload limit (10 MiB), matching the original form handler.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// One uploaded file. `bytes` is `None` when the content could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub raw_name: String,
    pub bytes: Option<Vec<u8>>,
}

impl UploadedFile {
    pub fn new(raw_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            raw_name: raw_name.into(),
            bytes: Some(bytes),
        }
    }

    /// A file whose name is known but whose content could not be read.
    pub fn unreadable(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            bytes: None,
        }
    }

    /// Reads `path` into an upload named after its final component.
    ///
    /// A read failure is not fatal: the file is kept with `bytes: None`.
    pub fn from_path(path: &Path) -> Self {
        let raw_name = upload_name(path);
        match std::fs::read(path) {
            Ok(bytes) => Self::new(raw_name, bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read upload");
                Self::unreadable(raw_name)
            }
        }
    }

    /// Content length, counting unreadable files as empty.
    pub fn len(&self) -> u64 {
        self.bytes.as_ref().map_or(0, |b| b.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Name a file at `path` is uploaded under: its final component, lossily decoded.
pub fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Errors surfaced at the host boundary before renaming starts.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload too large: {total} bytes exceeds limit of {limit} bytes")]
    TooLarge { total: u64, limit: u64 },
}

/// Rejects a batch whose total content size exceeds `limit` bytes.
pub fn ensure_within_limit(files: &[UploadedFile], limit: u64) -> Result<(), UploadError> {
    let total: u64 = files.iter().map(UploadedFile::len).sum();
    if total > limit {
        return Err(UploadError::TooLarge { total, limit });
    }
    Ok(())
}
