//! The path service: the only two primitives that touch the filesystem
//! for path setup. Everything else in the core builds paths through these.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::error::{GitError, Result};

/// Joins `segments` onto `gitdir`. Pure path arithmetic, no filesystem access.
fn join(gitdir: &Path, segments: &[&str]) -> PathBuf {
    let mut path = gitdir.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Returns `gitdir/segments…`, creating all missing ancestors when `mkdir` is true.
///
/// Fails with [`GitError::NotADirectory`] if the path exists but isn't a directory.
/// When the path doesn't exist and `mkdir` is false, the (non-existent) path is still
/// returned — callers that need to distinguish "absent" check `Path::exists` themselves.
pub fn dir(gitdir: &Path, segments: &[&str], mkdir: bool) -> Result<PathBuf> {
    let candidate = join(gitdir, segments);

    if candidate.exists() {
        return if candidate.is_dir() {
            Ok(candidate)
        } else {
            Err(GitError::NotADirectory(candidate))
        };
    }

    if mkdir {
        create_dir_all(&candidate)?;
    }

    Ok(candidate)
}

/// Returns `gitdir/segments…` as a file path, ensuring the *parent* directory exists
/// under the same rules as [`dir`]. The file itself may or may not exist.
pub fn file(gitdir: &Path, segments: &[&str], mkdir: bool) -> Result<PathBuf> {
    let (parent, name) = segments
        .split_last()
        .expect("file() requires at least one path segment");
    dir(gitdir, parent, mkdir)?;
    Ok(join(gitdir, &[parent, &[*name]].concat()))
}
