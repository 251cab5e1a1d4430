use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::{objects, refs};

use super::current_repo;

pub fn run(start: &Path, kind: &str, name: &str) -> Result<()> {
    let repo = current_repo(start)?;
    let id = refs::find(&repo, name, Some(kind))?;
    let object = objects::read_as(&repo, &id, kind)?;
    std::io::stdout().write_all(&object.payload())?;
    Ok(())
}
