use crate::source::{SourceError, open_log};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{BufRead, Write};

#[test]
fn reads_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.log.1");
    fs::write(&path, "first\nsecond\n").unwrap();

    let lines: Vec<String> = open_log(&path).unwrap().lines().map(Result::unwrap).collect();

    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn decompresses_gzip_rotations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.log.2.gz");
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(b"first\nsecond\n").unwrap();
    encoder.finish().unwrap();

    let lines: Vec<String> = open_log(&path).unwrap().lines().map(Result::unwrap).collect();

    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.log.5.gz");

    let err = match open_log(&path) {
        Ok(_) => panic!("Expected open failure"),
        Err(err) => err,
    };

    assert!(matches!(err, SourceError::Open { .. }));
    assert!(err.to_string().contains("server.log.5.gz"));
}
