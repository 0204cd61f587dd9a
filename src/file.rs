//! File copy/move/delete, directory sizing, and hashing.
//!
//! The mutating operations validate that the source exists and emit
//! `tracing` debug events; deletion can go through the system trash so
//! mistakes stay recoverable.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use digest::{Digest, DynDigest};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use tracing::debug;
use walkdir::WalkDir;

use crate::string::fuzzy_format;

/// Read granularity for streaming file hashing.
const HASH_CHUNK_SIZE: usize = 8192;

/// How [`delete`] disposes of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalStrategy {
    /// Move to the system trash (Recycle Bin / Trash) so the deletion is
    /// recoverable.
    Trash,
    /// Remove permanently, `rm -rf` style.
    Permanent,
}

/// Supported file-hashing algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    fn hasher(self) -> Box<dyn DynDigest> {
        match self {
            Self::Md5 => Box::new(Md5::new()),
            Self::Sha1 => Box::new(Sha1::new()),
            Self::Sha224 => Box::new(Sha224::new()),
            Self::Sha256 => Box::new(Sha256::new()),
            Self::Sha384 => Box::new(Sha384::new()),
            Self::Sha512 => Box::new(Sha512::new()),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = anyhow::Error;

    /// Parse an algorithm name fuzzily: `"SHA-256"`, `"sha 256"`, and
    /// `"sha256"` all name the same algorithm.
    fn from_str(name: &str) -> Result<Self> {
        match fuzzy_format(name).as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => bail!("hash algorithm '{name}' is unsupported"),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        };
        f.write_str(name)
    }
}

/// Copy a file into a directory, or copy a directory tree.
///
/// For a file source, `dst` is created as a directory and the file is
/// copied into it under its own name. For a directory source, `dst`
/// becomes a copy of the source tree.
///
/// # Errors
///
/// Returns an error when `src` does not exist or when any filesystem
/// operation fails.
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    if !src.exists() {
        bail!("could not copy '{}' because it does not exist", src.display());
    }

    debug!(src = %src.display(), dst = %dst.display(), "copying");
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create '{}'", dst.display()))?;
    if src.is_dir() {
        copy_tree(src, dst)
    } else {
        let target = dst.join(file_name(src)?);
        fs::copy(src, &target)
            .with_context(|| format!("failed to copy to '{}'", target.display()))?;
        Ok(())
    }
}

/// Move a file or directory into the `dst` directory.
///
/// Tries a rename first and falls back to copy-then-delete when the
/// source and destination live on different filesystems.
///
/// # Errors
///
/// Returns an error when `src` does not exist or when any filesystem
/// operation fails.
pub fn move_path<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    if !src.exists() {
        bail!("could not move '{}' because it does not exist", src.display());
    }

    debug!(src = %src.display(), dst = %dst.display(), "moving");
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create '{}'", dst.display()))?;
    let target = dst.join(file_name(src)?);
    if fs::rename(src, &target).is_ok() {
        return Ok(());
    }

    // Rename failed (likely a cross-device move); copy then delete.
    if src.is_dir() {
        copy_tree(src, &target)?;
    } else {
        fs::copy(src, &target)
            .with_context(|| format!("failed to copy to '{}'", target.display()))?;
    }
    delete(src, RemovalStrategy::Permanent)
}

/// Delete a file or directory.
///
/// # Errors
///
/// Returns an error when `path` does not exist or when removal fails.
pub fn delete<P: AsRef<Path>>(path: P, strategy: RemovalStrategy) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        bail!(
            "could not delete '{}' because it does not exist",
            path.display()
        );
    }

    debug!(path = %path.display(), ?strategy, "deleting");
    match strategy {
        RemovalStrategy::Trash => trash::delete(path)
            .with_context(|| format!("failed to trash '{}'", path.display()))?,
        RemovalStrategy::Permanent => {
            if path.is_dir() {
                fs::remove_dir_all(path)
                    .with_context(|| format!("failed to remove '{}'", path.display()))?;
            } else {
                fs::remove_file(path)
                    .with_context(|| format!("failed to remove '{}'", path.display()))?;
            }
        }
    }
    Ok(())
}

/// Total size of a directory and all its contents, in bytes.
///
/// Entries that cannot be read (permission denied, broken symlinks) are
/// silently skipped, so the function always returns a value.
#[must_use]
pub fn dir_size<P: AsRef<Path>>(path: P) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(path).into_iter().flatten() {
        if entry.file_type().is_file() {
            if let Ok(metadata) = entry.metadata() {
                total += metadata.len();
            }
        }
    }
    total
}

/// Hash a file's contents, streaming in fixed-size chunks, and return
/// the lowercase hex digest.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or read.
pub fn hash_file<P: AsRef<Path>>(path: P, algorithm: HashAlgorithm) -> Result<String> {
    let path = path.as_ref();
    let mut file = fs::File::open(path)
        .with_context(|| format!("failed to open '{}'", path.display()))?;

    let mut hasher = algorithm.hasher();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];
    loop {
        let read = file
            .read(&mut buffer)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create '{}'", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create '{}'", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .with_context(|| format!("failed to copy to '{}'", target.display()))?;
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name()
        .with_context(|| format!("'{}' has no file name", path.display()))
}
