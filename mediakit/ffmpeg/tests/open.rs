//! Open-failure classification through the real FFmpeg backend.
//!
//! These tests need no media fixtures: they only exercise the error paths
//! of the open operation.

use std::io::Write;

use mediakit_ffmpeg::FfmpegBackend;
use mediakit_session::MediaSession;
use mediakit_types::{Error, MediaOptions};

#[test]
fn nonexistent_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.mp4");

    let err = MediaSession::open(&FfmpegBackend::new(), &path, MediaOptions::new()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn nonexistent_directory_is_directory_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nodir").join("clip.mp4");

    let err = MediaSession::open(&FfmpegBackend::new(), &path, MediaOptions::new()).unwrap_err();
    assert!(matches!(err, Error::DirectoryNotFound { .. }));
}

#[test]
fn corrupt_file_is_open_failed_with_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.mp4");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"this is not a media container at all").unwrap();
    drop(file);

    let err = MediaSession::open(&FfmpegBackend::new(), &path, MediaOptions::new()).unwrap_err();
    assert!(matches!(err, Error::OpenFailed { .. }));
    assert!(std::error::Error::source(&err).is_some());
}
