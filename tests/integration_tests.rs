//! Integration tests for toolshed
//!
//! These tests create temporary file structures to exercise the file,
//! path, and size modules together with actual filesystem operations.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use toolshed::file::{self, HashAlgorithm, RemovalStrategy};
use toolshed::path::{file_suffix, join_path, list_dir};
use toolshed::size::{humanize_file_size, humanize_file_size_with, parse_humanized_file_size};

/// Helper function to create a file with specified content
fn create_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write file");
}

#[test]
fn test_dir_size_feeds_the_size_codec() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    create_file(&dir.path().join("blob.bin"), &vec![0u8; 32_000]);
    create_file(&dir.path().join("nested/more.bin"), &vec![0u8; 568]);

    let total = file::dir_size(dir.path());
    assert_eq!(total, 32_568);

    let readable = humanize_file_size(u128::from(total));
    assert_eq!(readable, "32.568 KB");
    assert_eq!(
        parse_humanized_file_size(&readable).expect("readable size should parse"),
        32_568
    );
}

#[test]
fn test_copy_preserves_content_hashes() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let src = dir.path().join("original.dat");
    create_file(&src, b"some binary-ish content\x00\x01\x02");

    let backup = dir.path().join("backup");
    file::copy(&src, &backup).expect("copy should succeed");

    let copied = backup.join("original.dat");
    let before = file::hash_file(&src, HashAlgorithm::Sha256).expect("hashing source");
    let after = file::hash_file(&copied, HashAlgorithm::Sha256).expect("hashing copy");
    assert_eq!(before, after);
}

#[test]
fn test_move_then_delete_cleans_up() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let src = dir.path().join("tree");
    create_file(&src.join("a.txt"), b"a");
    create_file(&src.join("sub/b.txt"), b"b");

    let archive = dir.path().join("archive");
    file::move_path(&src, &archive).expect("move should succeed");
    assert!(!src.exists());

    let moved = archive.join("tree");
    let names = list_dir(&moved, None, false, true).expect("listing moved tree");
    assert_eq!(names, vec!["a.txt", "sub"]);

    file::delete(&moved, RemovalStrategy::Permanent).expect("delete should succeed");
    assert!(!moved.exists());
}

#[test]
fn test_list_dir_with_pattern_and_suffixes() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    for name in ["site.tar.gz", "notes.txt", "raw"] {
        create_file(&dir.path().join(name), b"x");
    }

    let archives = list_dir(dir.path(), Some("*.gz"), false, true).expect("listing archives");
    assert_eq!(archives, vec!["site.tar.gz"]);
    assert_eq!(file_suffix(&archives[0], true, true), ".tar.gz");

    let joined = join_path(dir.path(), &["/notes.txt"]);
    assert!(joined.exists());
}

#[test]
fn test_forced_units_survive_a_filesystem_round_trip() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    create_file(&dir.path().join("chunk"), &vec![0u8; 4096]);

    let total = u128::from(file::dir_size(dir.path()));
    let in_kib = humanize_file_size_with(total, Some("KiB"), None, true)
        .expect("KiB is a valid unit");
    assert_eq!(in_kib, "4 KiB");
    assert_eq!(
        parse_humanized_file_size(&in_kib).expect("formatted size should parse"),
        total
    );
}
