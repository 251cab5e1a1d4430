use std::path::Path;

use crate::checkout;
use crate::error::Result;
use crate::refs;

use super::current_repo;

pub fn run(start: &Path, name: &str, target: &Path) -> Result<()> {
    let repo = current_repo(start)?;
    let id = refs::find(&repo, name, Some("tree"))?;
    checkout::checkout(&repo, &id, target)
}
