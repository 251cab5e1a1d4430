use std::path::Path;

use crate::error::Result;
use crate::objects::tree::EntryKind;
use crate::objects::{self, GitObject};
use crate::refs;

use super::current_repo;

pub fn run(start: &Path, name: &str, recurse: bool) -> Result<()> {
    let repo = current_repo(start)?;
    let id = refs::find(&repo, name, Some("tree"))?;
    list(&repo, &id, "", recurse)
}

fn list(repo: &crate::repository::Repository, id: &str, prefix: &str, recurse: bool) -> Result<()> {
    let object = objects::read_as(repo, id, "tree")?;
    let tree = match object {
        GitObject::Tree(t) => t,
        _ => unreachable!("read_as(\"tree\") guarantees a Tree"),
    };

    for leaf in &tree.items {
        let kind = leaf.kind()?;
        let kind_name = match kind {
            EntryKind::Tree => "tree",
            EntryKind::Blob => "blob",
            EntryKind::Commit => "commit",
        };
        let full_path = format!("{prefix}{}", leaf.path);

        if recurse && kind == EntryKind::Tree {
            list(repo, &leaf.id, &format!("{full_path}/"), recurse)?;
        } else {
            println!("{} {kind_name} {}\t{full_path}", leaf.mode, leaf.id);
        }
    }
    Ok(())
}
