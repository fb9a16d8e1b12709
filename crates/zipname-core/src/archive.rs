//! Packaging renamed entries into a single archive.
//!
//! The engine only produces `(name, bytes)` pairs; turning them into archive
//! bytes sits behind [`ArchivePackager`] so hosts can swap the format.

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::engine::ArchiveEntry;

/// Download name hosts give the archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "renamed_files.zip";
/// MIME type of the produced archive.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// Entry compression inside the zip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Stored,
    #[default]
    Deflated,
}

impl From<Compression> for CompressionMethod {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Stored => CompressionMethod::Stored,
            Compression::Deflated => CompressionMethod::Deflated,
        }
    }
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("zip: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("write entry {name}: {source}")]
    Entry {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serializes entries, in order, into archive bytes.
pub trait ArchivePackager {
    fn package(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>, PackError>;
}

/// Zip packager writing into memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager {
    compression: Compression,
}

impl ZipPackager {
    pub fn new(compression: Compression) -> Self {
        Self { compression }
    }
}

impl ArchivePackager for ZipPackager {
    fn package(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>, PackError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(self.compression.into());

        for entry in entries {
            writer.start_file(entry.name.as_str(), options)?;
            writer
                .write_all(&entry.bytes)
                .map_err(|source| PackError::Entry {
                    name: entry.name.clone(),
                    source,
                })?;
        }

        let bytes = writer.finish()?.into_inner();
        tracing::info!(
            entries = entries.len(),
            bytes = bytes.len(),
            compression = ?self.compression,
            "archive packaged"
        );
        Ok(bytes)
    }
}
