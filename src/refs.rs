//! References: `ref: <path>` indirection files and the name resolver that turns
//! a short name or hex prefix into a full object id.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{GitError, Result};
use crate::objects::{self, GitObject};
use crate::repository::Repository;

fn hex_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{4,40}$").unwrap())
}

/// Reads a single ref file at `path` (relative to the gitdir) and follows `ref:`
/// indirection recursively. A broken chain resolves to `Ok(None)`, not an error —
/// this is the normal state of a freshly created `HEAD`.
pub fn resolve(repo: &Repository, path: &[&str]) -> Result<Option<String>> {
    let file = match repo.file(path, false) {
        Ok(f) => f,
        Err(_) => return Ok(None),
    };
    if !file.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&file)?;
    let contents = contents.trim_end_matches('\n');

    if let Some(target) = contents.strip_prefix("ref: ") {
        let segments: Vec<&str> = target.split('/').collect();
        return resolve(repo, &segments);
    }

    Ok(Some(contents.to_string()))
}

/// Writes `path` as a direct reference to `id`.
pub fn create(repo: &Repository, path: &[&str], id: &str) -> Result<()> {
    let file = repo.file(path, true)?;
    std::fs::write(file, format!("{id}\n"))?;
    Ok(())
}

/// Lists every ref under `refs/`, sorted by path, mapping the relative name
/// (e.g. `"heads/master"`) to its resolved id (omitted if unresolvable).
pub fn list(repo: &Repository) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    let refs_dir = repo.dir(&["refs"], false)?;
    if refs_dir.is_dir() {
        walk(repo, &refs_dir, "refs", &mut out)?;
    }
    Ok(out)
}

fn walk(
    repo: &Repository,
    dir: &std::path::Path,
    prefix: &str,
    out: &mut BTreeMap<String, String>,
) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = format!("{prefix}/{name}");
        let path = entry.path();
        if path.is_dir() {
            walk(repo, &path, &relative, out)?;
        } else {
            let segments: Vec<&str> = relative.split('/').collect();
            if let Some(id) = resolve(repo, &segments)? {
                out.insert(relative, id);
            }
        }
    }
    Ok(())
}

/// Collects every way `name` could refer to an object, without disambiguating yet.
fn resolve_candidates(repo: &Repository, name: &str) -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    if name == "HEAD" {
        if let Some(id) = resolve(repo, &["HEAD"])? {
            candidates.push(id);
        }
        return Ok(candidates);
    }

    if hex_prefix().is_match(name) {
        let lower = name.to_lowercase();
        if lower.len() == 40 {
            let dir = repo.dir(&["objects", &lower[0..2]], false).ok();
            if let Some(dir) = dir {
                if dir.join(&lower[2..]).exists() {
                    candidates.push(lower.clone());
                }
            }
        } else if let Ok(dir) = repo.dir(&["objects", &lower[0..2]], false) {
            if dir.is_dir() {
                let rest = &lower[2..];
                for entry in std::fs::read_dir(&dir)? {
                    let entry = entry?;
                    let fname = entry.file_name().to_string_lossy().into_owned();
                    if fname.starts_with(rest) {
                        candidates.push(format!("{}{}", &lower[0..2], fname));
                    }
                }
            }
        }
    }

    if let Some(id) = resolve(repo, &["refs", "tags", name])? {
        candidates.push(id);
    }
    if let Some(id) = resolve(repo, &["refs", "heads", name])? {
        candidates.push(id);
    }

    candidates.sort();
    candidates.dedup();
    Ok(candidates)
}

/// Resolves `name` to a single object id, optionally following tag/commit
/// indirection until an object of `kind` is reached.
///
/// Fails with [`GitError::UnknownRef`] if nothing matches and
/// [`GitError::AmbiguousRef`] if more than one candidate matches.
pub fn find(repo: &Repository, name: &str, kind: Option<&str>) -> Result<String> {
    let candidates = resolve_candidates(repo, name)?;

    let id = match candidates.len() {
        0 => return Err(GitError::UnknownRef(name.to_string())),
        1 => candidates.into_iter().next().unwrap(),
        _ => {
            return Err(GitError::AmbiguousRef {
                name: name.to_string(),
                candidates,
            })
        }
    };

    match kind {
        None => Ok(id),
        Some(kind) => follow(repo, id, kind),
    }
}

/// Follows `tag -> object` and `commit -> tree` indirection until `id` names an
/// object of `kind`.
fn follow(repo: &Repository, mut id: String, kind: &str) -> Result<String> {
    loop {
        let object = objects::read(repo, &id)?.ok_or_else(|| GitError::Malformed {
            id: id.clone(),
            reason: "resolved id names no object".to_string(),
            offset: 0,
        })?;
        if object.kind() == kind {
            return Ok(id);
        }
        match object {
            GitObject::Tag(tag) => {
                id = tag.object().ok_or_else(|| GitError::Malformed {
                    id: id.clone(),
                    reason: "tag has no object header".to_string(),
                    offset: 0,
                })?;
            }
            GitObject::Commit(commit) if kind == "tree" => {
                id = commit.tree().ok_or_else(|| GitError::Malformed {
                    id: id.clone(),
                    reason: "commit has no tree header".to_string(),
                    offset: 0,
                })?;
            }
            _ => {
                return Err(GitError::WrongKind {
                    id,
                    kind: kind.to_string(),
                })
            }
        }
    }
}
