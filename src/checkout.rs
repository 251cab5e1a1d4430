//! Checkout: materializes a tree object onto disk.

use std::path::Path;

use crate::error::{GitError, Result};
use crate::objects::tree::EntryKind;
use crate::objects::{self, GitObject};
use crate::repository::Repository;

/// Recursively writes the tree identified by `id` into `target`.
///
/// `target` must either not exist (it is created) or exist as an empty directory;
/// checking out into an occupied directory would silently clobber working-tree
/// content, so this refuses with [`GitError::DirectoryNotEmpty`] instead.
pub fn checkout(repo: &Repository, id: &str, target: &Path) -> Result<()> {
    if target.exists() {
        if !target.is_dir() {
            return Err(GitError::NotADirectory(target.to_path_buf()));
        }
        if target.read_dir()?.next().is_some() {
            return Err(GitError::DirectoryNotEmpty(target.to_path_buf()));
        }
    } else {
        std::fs::create_dir_all(target)?;
    }

    let object = objects::read_as(repo, id, "tree")?;
    let tree = match object {
        GitObject::Tree(t) => t,
        _ => unreachable!("read_as(\"tree\") guarantees a Tree"),
    };

    write_tree(repo, &tree, target)
}

fn write_tree(repo: &Repository, tree: &objects::Tree, target: &Path) -> Result<()> {
    for leaf in &tree.items {
        let dest = target.join(&leaf.path);
        match leaf.kind()? {
            EntryKind::Tree => {
                std::fs::create_dir_all(&dest)?;
                let child = objects::read_as(repo, &leaf.id, "tree")?;
                match child {
                    GitObject::Tree(t) => write_tree(repo, &t, &dest)?,
                    _ => unreachable!("read_as(\"tree\") guarantees a Tree"),
                }
            }
            EntryKind::Blob => {
                let object = objects::read_as(repo, &leaf.id, "blob")?;
                match object {
                    GitObject::Blob(blob) => std::fs::write(&dest, blob.data())?,
                    _ => unreachable!("read_as(\"blob\") guarantees a Blob"),
                }
            }
            EntryKind::Commit => {
                // gitlinks (submodule boundaries) are left untouched.
            }
        }
    }
    Ok(())
}
