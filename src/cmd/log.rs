use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::objects::{self, Commit, GitObject};
use crate::refs;

use super::current_repo;

/// Emits a graph-dialect trace of the commit ancestry of `name`, one edge per
/// parent link, as `c_<id> -> c_<parent>;` lines wrapped in a `digraph` block.
pub fn run(start: &Path, name: &str) -> Result<()> {
    let repo = current_repo(start)?;
    let id = refs::find(&repo, name, Some("commit"))?;

    println!("digraph wyaglog{{");
    println!("  node[shape=rect]");

    let mut seen = HashSet::new();
    let mut stack = vec![id];
    while let Some(id) = stack.pop() {
        if !seen.insert(id.clone()) {
            continue;
        }

        let object = objects::read_as(&repo, &id, "commit")?;
        let commit = match object {
            GitObject::Commit(c) => c,
            _ => unreachable!("read_as(\"commit\") guarantees a Commit"),
        };

        for parent in commit.parents() {
            println!("  c_{id} -> c_{parent};");
            stack.push(parent);
        }
    }

    println!("}}");
    Ok(())
}

/// Ancestry as an in-memory list (oldest-last), for callers that want data
/// instead of rendered graphviz text.
pub fn ancestry(repo: &crate::repository::Repository, id: &str) -> Result<Vec<(String, Commit)>> {
    let mut seen = HashSet::new();
    let mut stack = vec![id.to_string()];
    let mut out = Vec::new();

    while let Some(id) = stack.pop() {
        if !seen.insert(id.clone()) {
            continue;
        }
        let object = objects::read_as(repo, &id, "commit")?;
        let commit = match object {
            GitObject::Commit(c) => c,
            _ => unreachable!("read_as(\"commit\") guarantees a Commit"),
        };
        for parent in commit.parents() {
            stack.push(parent);
        }
        out.push((id, commit));
    }

    Ok(out)
}
