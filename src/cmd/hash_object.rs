use std::path::Path;

use crate::error::Result;
use crate::objects::{self, GitObject};

use super::current_repo;

pub fn run(start: &Path, kind: &str, write: bool, file: &Path) -> Result<String> {
    let data = std::fs::read(file)?;
    let object = GitObject::from_payload(kind, &data)?;

    if write {
        let repo = current_repo(start)?;
        objects::write(&repo, &object)
    } else {
        Ok(object.hash())
    }
}
