use std::path::PathBuf;

use thiserror::Error;

/// The closed set of failures the core can produce.
///
/// Every fallible core operation returns `Result<_, GitError>`; only programmer-error
/// invariant violations inside the core itself still `panic!`.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("configuration file missing: {0}")]
    ConfigurationMissing(PathBuf),

    #[error("unsupported repositoryformatversion: {0:?}")]
    UnsupportedFormat(Option<String>),

    #[error("{0} is not empty")]
    NotEmpty(PathBuf),

    #[error("no git directory found in {0} or any parent directory")]
    NoRepository(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("malformed object {id}: {reason} (at offset {offset})")]
    Malformed {
        id: String,
        reason: String,
        offset: usize,
    },

    #[error("unknown object kind {kind:?} for object {id}")]
    UnknownKind { id: String, kind: String },

    #[error("unknown tree entry mode {mode:?} for {path:?}")]
    UnknownMode { mode: String, path: String },

    #[error("malformed index at offset {offset}: {reason}")]
    MalformedIndex { offset: usize, reason: String },

    #[error("unknown revision or path not in the working tree: {0}")]
    UnknownRef(String),

    #[error("{name} is ambiguous, candidates: {candidates:?}")]
    AmbiguousRef {
        name: String,
        candidates: Vec<String>,
    },

    #[error("no such object of kind {kind}: {id}")]
    WrongKind { id: String, kind: String },

    #[error(transparent)]
    IoFailure(#[from] std::io::Error),

    #[error("{0} is not empty")]
    DirectoryNotEmpty(PathBuf),
}

pub type Result<T> = std::result::Result<T, GitError>;
