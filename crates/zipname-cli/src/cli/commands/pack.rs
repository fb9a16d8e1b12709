//! `zipname pack <files>...` – rename files and write the archive.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use zipname_core::archive::{ArchivePackager, ZipPackager, ARCHIVE_MIME_TYPE};
use zipname_core::checksum;
use zipname_core::config::ZipnameConfig;
use zipname_core::upload::{self, UploadedFile};

use super::engine_for;
use crate::cli::PolicyArgs;

/// Temporary suffix used before the atomic rename into place.
const TEMP_SUFFIX: &str = ".part";

/// What a finished `pack` produced.
#[derive(Debug)]
pub struct PackSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub bytes: usize,
    pub sha256: String,
}

/// Reads, renames and packages `files` into an archive at `output`
/// (or the configured archive name in the current directory).
pub fn pack_files(
    cfg: &ZipnameConfig,
    files: &[PathBuf],
    output: Option<&Path>,
    policy: &PolicyArgs,
) -> Result<PackSummary> {
    let engine = engine_for(cfg, policy);
    let uploads: Vec<UploadedFile> = files.iter().map(|p| UploadedFile::from_path(p)).collect();
    upload::ensure_within_limit(&uploads, cfg.max_upload_bytes)?;

    let entries = engine.process(uploads);
    for e in &entries {
        println!("{}  ->  {}", e.source_name, e.name);
    }
    let archive = ZipPackager::new(cfg.compression)
        .package(&entries)
        .context("package archive")?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.archive_name));
    write_atomic(&path, &archive)?;
    // Digest what landed on disk, not the buffer.
    let sha256 = checksum::sha256_path(&path)?;

    Ok(PackSummary {
        path,
        entries: entries.len(),
        bytes: archive.len(),
        sha256,
    })
}

/// Write to `<path>.part`, then rename over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(TEMP_SUFFIX);
    let temp = PathBuf::from(temp);
    fs::write(&temp, data).with_context(|| format!("write {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("rename {} -> {}", temp.display(), path.display()))?;
    Ok(())
}

pub fn run_pack(
    cfg: &ZipnameConfig,
    files: &[PathBuf],
    output: Option<&Path>,
    policy: &PolicyArgs,
) -> Result<()> {
    let summary = pack_files(cfg, files, output, policy)?;
    let skipped = files.len() - summary.entries;
    if skipped > 0 {
        println!("{skipped} file(s) skipped (no usable name).");
    }
    println!(
        "Wrote {} entries to {} ({} bytes, {})",
        summary.entries,
        summary.path.display(),
        summary.bytes,
        ARCHIVE_MIME_TYPE
    );
    println!("{}  {}", summary.sha256, summary.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_writes_archive_and_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("Report 1.PDF");
        let b = dir.path().join("Report 1.pdf");
        fs::write(&a, b"one").unwrap();
        fs::write(&b, b"two").unwrap();
        let out = dir.path().join("out.zip");

        let args = PolicyArgs {
            prefix: Some("Report".into()),
            style: Some("pad".into()),
            digits: Some("2".into()),
            cleanup: Some("spaces,lowercase".into()),
        };
        let summary = pack_files(&ZipnameConfig::default(), &[a, b], Some(&out), &args).unwrap();
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.path, out);

        let written = fs::read(&out).unwrap();
        assert!(written.starts_with(b"PK"));
        assert_eq!(written.len(), summary.bytes);
        assert_eq!(checksum::sha256_bytes(&written), summary.sha256);
        assert!(!dir.path().join("out.zip.part").exists());
    }

    #[test]
    fn pack_rejects_oversized_upload() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("big.bin");
        fs::write(&a, vec![0u8; 64]).unwrap();
        let out = dir.path().join("out.zip");

        let cfg = ZipnameConfig {
            max_upload_bytes: 10,
            ..Default::default()
        };
        let err = pack_files(&cfg, &[a], Some(&out), &PolicyArgs::default()).unwrap_err();
        assert!(err.to_string().contains("upload too large"));
        assert!(!out.exists());
    }
}
