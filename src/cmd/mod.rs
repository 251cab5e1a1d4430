//! One module per CLI subcommand; each is a thin driver over the core library.

pub mod cat_file;
pub mod checkout;
pub mod hash_object;
pub mod init;
pub mod log;
pub mod ls_files;
pub mod ls_tree;
pub mod rev_parse;
pub mod show_ref;
pub mod tag;

use std::path::Path;

use crate::error::Result;
use crate::repository::Repository;

/// Finds the repository containing `start`, failing loudly if there isn't one.
pub(crate) fn current_repo(start: &Path) -> Result<Repository> {
    Repository::find(start, true).map(|repo| repo.expect("required find always returns Some or errors"))
}
