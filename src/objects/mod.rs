//! The object store: content-addressed blob/commit/tree/tag storage under
//! `objects/<aa>/<bb…>`, framed as `"<kind> <len>\0<payload>"` and zlib-compressed.

pub mod blob;
pub mod commit;
pub mod kvlm;
pub mod tag;
pub mod tree;

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use sha1::{Digest, Sha1};

use crate::error::{GitError, Result};
use crate::repository::Repository;

pub use blob::Blob;
pub use commit::Commit;
pub use tag::Tag;
pub use tree::Tree;

/// The four object kinds the store understands, each wrapping its parsed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitObject {
    Blob(Blob),
    Commit(Commit),
    Tree(Tree),
    Tag(Tag),
}

impl GitObject {
    pub fn kind(&self) -> &'static str {
        match self {
            GitObject::Blob(_) => "blob",
            GitObject::Commit(_) => "commit",
            GitObject::Tree(_) => "tree",
            GitObject::Tag(_) => "tag",
        }
    }

    /// The object's own payload, without the `"<kind> <len>\0"` frame.
    pub fn payload(&self) -> Vec<u8> {
        self.serialize_payload()
    }

    fn serialize_payload(&self) -> Vec<u8> {
        match self {
            GitObject::Blob(b) => b.serialize(),
            GitObject::Commit(c) => c.serialize(),
            GitObject::Tree(t) => t.serialize(),
            GitObject::Tag(t) => t.serialize(),
        }
    }

    /// Builds a `GitObject` of `kind` from an unframed payload, e.g. the raw
    /// content of a file about to be hashed.
    pub fn from_payload(kind: &str, data: &[u8]) -> Result<GitObject> {
        GitObject::parse_payload(kind, "<new object>", data)
    }

    fn parse_payload(kind: &str, id: &str, data: &[u8]) -> Result<GitObject> {
        match kind {
            "blob" => Ok(GitObject::Blob(Blob::parse(data))),
            "commit" => Ok(GitObject::Commit(Commit::parse(data))),
            "tree" => Ok(GitObject::Tree(Tree::parse(data).map_err(|err| {
                if let GitError::Malformed { reason, offset, .. } = err {
                    GitError::Malformed {
                        id: id.to_string(),
                        reason,
                        offset,
                    }
                } else {
                    err
                }
            })?)),
            "tag" => Ok(GitObject::Tag(Tag::parse(data))),
            other => Err(GitError::UnknownKind {
                id: id.to_string(),
                kind: other.to_string(),
            }),
        }
    }

    /// Wraps the payload in its framed form: `"<kind> <len>\0<payload>"`.
    fn framed(&self) -> Vec<u8> {
        let payload = self.serialize_payload();
        let mut framed = Vec::with_capacity(payload.len() + 32);
        framed.extend_from_slice(self.kind().as_bytes());
        framed.push(b' ');
        framed.extend_from_slice(payload.len().to_string().as_bytes());
        framed.push(0);
        framed.extend_from_slice(&payload);
        framed
    }

    /// The SHA-1 id this object would be stored under, without writing anything.
    pub fn hash(&self) -> String {
        let mut hasher = Sha1::new();
        hasher.update(self.framed());
        hex::encode(hasher.finalize())
    }
}

/// Reads and parses the object identified by the full 40-hex `id`.
///
/// Returns `Ok(None)` if no object file exists at that id, rather than an error.
pub fn read(repo: &Repository, id: &str) -> Result<Option<GitObject>> {
    let path = repo.file(&["objects", &id[0..2], &id[2..]], false)?;
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read(&path)?;

    let mut decoder = ZlibDecoder::new(raw.as_slice());
    let mut framed = Vec::new();
    decoder.read_to_end(&mut framed)?;

    let space = framed
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| GitError::Malformed {
            id: id.to_string(),
            reason: "missing space after object kind".to_string(),
            offset: 0,
        })?;
    let kind = String::from_utf8_lossy(&framed[0..space]).into_owned();

    let nul = framed[space..]
        .iter()
        .position(|&b| b == 0)
        .map(|i| i + space)
        .ok_or_else(|| GitError::Malformed {
            id: id.to_string(),
            reason: "missing NUL after object length".to_string(),
            offset: space,
        })?;
    let declared_len: usize = std::str::from_utf8(&framed[space + 1..nul])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| GitError::Malformed {
            id: id.to_string(),
            reason: "object length is not a valid integer".to_string(),
            offset: space + 1,
        })?;

    let payload = &framed[nul + 1..];
    if payload.len() != declared_len {
        return Err(GitError::Malformed {
            id: id.to_string(),
            reason: format!(
                "declared length {declared_len} does not match actual payload length {}",
                payload.len()
            ),
            offset: nul + 1,
        });
    }

    GitObject::parse_payload(&kind, id, payload).map(Some)
}

/// Compresses and writes `object`, returning the id it was stored under.
///
/// Writing is idempotent: an object already present at the target path is left as-is.
pub fn write(repo: &Repository, object: &GitObject) -> Result<String> {
    let framed = object.framed();

    let mut hasher = Sha1::new();
    hasher.update(&framed);
    let id = hex::encode(hasher.finalize());

    let path = repo.file(&["objects", &id[0..2], &id[2..]], true)?;
    if !path.exists() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&framed)?;
        let compressed = encoder.finish()?;
        std::fs::write(&path, compressed)?;
    }

    Ok(id)
}

/// Reads an object that is required to exist and fails unless it is of `kind`.
///
/// Callers reach this only with an id already resolved via a ref, a tree leaf,
/// or an index entry, so a missing object file here means repository corruption,
/// not a legitimate "doesn't exist yet" case.
pub fn read_as(repo: &Repository, id: &str, kind: &str) -> Result<GitObject> {
    let object = read(repo, id)?.ok_or_else(|| GitError::Malformed {
        id: id.to_string(),
        reason: "object file is missing".to_string(),
        offset: 0,
    })?;
    if object.kind() != kind {
        return Err(GitError::WrongKind {
            id: id.to_string(),
            kind: kind.to_string(),
        });
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::blob::Blob;
    use tempfile::tempdir;

    fn repo() -> (tempfile::TempDir, Repository) {
        let root = tempdir().unwrap();
        let path = root.path().join("repo");
        let repo = Repository::create(&path).unwrap();
        (root, repo)
    }

    #[test]
    fn write_then_read_round_trips_a_blob() {
        let (_root, repo) = repo();
        let object = GitObject::Blob(Blob::new(b"hello world\n".to_vec()));
        let id = write(&repo, &object).unwrap();
        assert_eq!(id.len(), 40);

        let read_back = read(&repo, &id).unwrap();
        assert_eq!(read_back, Some(object));
    }

    #[test]
    fn read_of_missing_id_is_absent() {
        let (_root, repo) = repo();
        let missing = "f".repeat(40);
        assert_eq!(read(&repo, &missing).unwrap(), None);
    }

    #[test]
    fn hash_matches_known_git_blob_id() {
        // `git hash-object` for an empty blob is well known.
        let object = GitObject::Blob(Blob::new(Vec::new()));
        assert_eq!(object.hash(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
    }

    #[test]
    fn write_is_idempotent() {
        let (_root, repo) = repo();
        let object = GitObject::Blob(Blob::new(b"same content".to_vec()));
        let id1 = write(&repo, &object).unwrap();
        let id2 = write(&repo, &object).unwrap();
        assert_eq!(id1, id2);
    }

    #[test]
    fn read_as_rejects_wrong_kind() {
        let (_root, repo) = repo();
        let object = GitObject::Blob(Blob::new(b"x".to_vec()));
        let id = write(&repo, &object).unwrap();
        let err = read_as(&repo, &id, "commit").unwrap_err();
        assert!(matches!(err, GitError::WrongKind { .. }));
    }

    #[test]
    fn read_unknown_kind_is_malformed() {
        let (_root, repo) = repo();
        let framed = b"bogus 3\0xyz".to_vec();
        let mut hasher = Sha1::new();
        hasher.update(&framed);
        let id = hex::encode(hasher.finalize());
        let path = repo.file(&["objects", &id[0..2], &id[2..]], true).unwrap();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&framed).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let err = read(&repo, &id).unwrap_err();
        assert!(matches!(err, GitError::UnknownKind { .. }));
    }
}
