//! End-to-end: raw host input through the engine into a zip, read back from disk.

use std::collections::HashSet;
use std::io::{Cursor, Read};

use zipname_core::archive::{ArchivePackager, ZipPackager};
use zipname_core::policy::{DigitsInput, RawPolicy, RenamePolicy};
use zipname_core::{RenameEngine, UploadedFile};

fn entry_names(bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut f = archive.by_index(i).unwrap();
            let mut buf = Vec::new();
            f.read_to_end(&mut buf).unwrap();
            (f.name().to_string(), buf)
        })
        .collect()
}

#[test]
fn report_batch_drops_empty_name_and_pads_two_digits() {
    let raw = RawPolicy {
        prefix: Some("Report".into()),
        numbering_style: Some("pad".into()),
        digits: Some(DigitsInput::Text("2".into())),
        cleanup: Some("spaces,lowercase".into()),
    };
    let engine = RenameEngine::new(RenamePolicy::from_raw(&raw));
    assert_eq!(engine.prefix(), "report");

    let files = vec![
        UploadedFile::new("Report 1.PDF", b"one".to_vec()),
        UploadedFile::new("Report 1.pdf", b"two".to_vec()),
        UploadedFile::new("", b"three".to_vec()),
    ];
    let entries = engine.process(files);
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["report_01.pdf", "report_02.pdf"]);

    let archive = ZipPackager::default().package(&entries).unwrap();
    let files = entry_names(archive);
    assert_eq!(
        files,
        vec![
            ("report_01.pdf".to_string(), b"one".to_vec()),
            ("report_02.pdf".to_string(), b"two".to_vec()),
        ]
    );
}

#[test]
fn files_read_from_disk_are_packaged() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("holiday photo.JPG");
    let b = dir.path().join("notes");
    std::fs::write(&a, b"jpeg").unwrap();
    std::fs::write(&b, b"text").unwrap();
    let missing = dir.path().join("vanished.txt");

    let raw = RawPolicy {
        prefix: Some("Trip 2024".into()),
        numbering_style: Some("Dash".into()),
        ..Default::default()
    };
    let engine = RenameEngine::new(RenamePolicy::from_raw(&raw));
    let uploads: Vec<_> = [&a, &b, &missing]
        .into_iter()
        .map(|p| UploadedFile::from_path(p))
        .collect();
    let entries = engine.process(uploads);

    let files = entry_names(ZipPackager::default().package(&entries).unwrap());
    assert_eq!(
        files,
        vec![
            ("Trip_2024-1.jpg".to_string(), b"jpeg".to_vec()),
            ("Trip_2024-2".to_string(), b"text".to_vec()),
            ("Trip_2024-3.txt".to_string(), Vec::new()),
        ]
    );
}

#[test]
fn extreme_options_still_produce_unique_names() {
    let raw = RawPolicy {
        prefix: Some("!!!".into()),
        numbering_style: Some("none".into()),
        digits: Some(DigitsInput::Text("-999".into())),
        cleanup: Some("symbols".into()),
    };
    let engine = RenameEngine::new(RenamePolicy::from_raw(&raw));
    assert_eq!(engine.prefix(), "file");

    let files: Vec<_> = (0..25)
        .map(|i| UploadedFile::new(if i % 5 == 0 { "/" } else { "dup.txt" }, vec![i as u8]))
        .collect();
    let entries = engine.process(files);
    assert_eq!(entries.len(), 20);
    let unique: HashSet<_> = entries.iter().map(|e| e.name.clone()).collect();
    assert_eq!(unique.len(), 20);
    assert_eq!(entries[0].name, "file.txt");
    assert_eq!(entries[1].name, "file_2.txt");
    assert_eq!(entries[0].bytes, vec![1u8]);
}
