//! The repository handle: a value binding a worktree path, a `.git`
//! directory path, and a parsed `core` configuration.

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use configparser::ini::{Ini, IniDefault};
use log::debug;

use crate::error::{GitError, Result};
use crate::path;

/// A git repository: a worktree, its `.git` metadata directory, and `core.*` config.
#[derive(Clone)]
pub struct Repository {
    worktree: PathBuf,
    gitdir: PathBuf,
    config: Ini,
}

impl Repository {
    /// Opens a repository rooted at `path`.
    ///
    /// Unless `force` is set, requires `path/.git` to exist, requires its `config`
    /// file to exist, and requires `core.repositoryformatversion` to be `0`.
    pub fn open(path: &Path, force: bool) -> Result<Repository> {
        let worktree = path.to_path_buf();
        let gitdir = worktree.join(".git");

        if !force && !gitdir.is_dir() {
            return Err(GitError::NotARepository(path.to_path_buf()));
        }

        let mut config = Ini::new();
        let config_path = gitdir.join("config");
        if config_path.exists() {
            config.load(&config_path).map_err(|reason| {
                GitError::IoFailure(std::io::Error::other(format!(
                    "{}: {reason}",
                    config_path.display()
                )))
            })?;
        } else if !force {
            return Err(GitError::ConfigurationMissing(config_path));
        }

        if !force {
            let version = config.get("core", "repositoryformatversion");
            if version.as_deref() != Some("0") {
                return Err(GitError::UnsupportedFormat(version));
            }
        }

        Ok(Repository {
            worktree,
            gitdir,
            config,
        })
    }

    /// Creates a brand new repository at `path` and returns the handle for it.
    pub fn create(path: &Path) -> Result<Repository> {
        let mut repo = Repository::open(path, true)?;

        if repo.worktree.exists() {
            if !repo.worktree.is_dir() {
                return Err(GitError::NotADirectory(repo.worktree.clone()));
            }
            let gitdir_occupied = repo.gitdir.exists()
                && repo
                    .gitdir
                    .read_dir()
                    .map(|mut it| it.next().is_some())
                    .unwrap_or(false);
            if gitdir_occupied {
                return Err(GitError::NotEmpty(repo.worktree.clone()));
            }
        } else {
            create_dir_all(&repo.worktree)?;
        }

        repo.dir(&["branches"], true)?;
        repo.dir(&["objects"], true)?;
        repo.dir(&["refs", "tags"], true)?;
        repo.dir(&["refs", "heads"], true)?;

        let description_path = repo.file(&["description"], false)?;
        let mut f = File::create(description_path)?;
        writeln!(
            f,
            "Unnamed repository: edit this file 'description' to name the repository."
        )?;

        let head_path = repo.file(&["HEAD"], false)?;
        let mut f = File::create(head_path)?;
        writeln!(f, "ref: refs/heads/master")?;

        repo.config = Repository::default_config();
        let config_path = repo.file(&["config"], false)?;
        repo.config
            .write(&config_path)
            .map_err(|_| GitError::IoFailure(std::io::Error::other("failed to write config")))?;

        debug!("created repository at {}", repo.worktree.display());
        Ok(repo)
    }

    fn default_config() -> Ini {
        let mut defaults = IniDefault::default();
        defaults.comment_symbols = vec!['#'];
        defaults.delimiters = vec!['='];
        defaults.case_sensitive = true;
        defaults.multiline = false;

        let mut config = Ini::new_from_defaults(defaults);
        config.setstr("core", "repositoryformatversion", Some("0"));
        config.setstr("core", "filemode", Some("false"));
        config.setstr("core", "bare", Some("false"));
        config
    }

    /// Walks upward from `start` (inclusive) looking for a directory containing `.git/`.
    pub fn find(start: &Path, required: bool) -> Result<Option<Repository>> {
        let real = start
            .canonicalize()
            .map_err(|_| GitError::NoRepository(start.to_path_buf()))?;

        if real.join(".git").is_dir() {
            return Ok(Some(Repository::open(&real, false)?));
        }

        match real.parent() {
            Some(parent) if parent != real => Repository::find(parent, required),
            _ => {
                if required {
                    Err(GitError::NoRepository(start.to_path_buf()))
                } else {
                    Ok(None)
                }
            }
        }
    }

    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    pub fn gitdir(&self) -> &Path {
        &self.gitdir
    }

    pub fn config(&self) -> &Ini {
        &self.config
    }

    /// See [`path::dir`].
    pub fn dir(&self, segments: &[&str], mkdir: bool) -> Result<PathBuf> {
        path::dir(&self.gitdir, segments, mkdir)
    }

    /// See [`path::file`].
    pub fn file(&self, segments: &[&str], mkdir: bool) -> Result<PathBuf> {
        path::file(&self.gitdir, segments, mkdir)
    }
}
