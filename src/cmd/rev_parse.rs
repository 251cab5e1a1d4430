use std::path::Path;

use crate::error::Result;
use crate::refs;

use super::current_repo;

pub fn run(start: &Path, name: &str, kind: Option<&str>) -> Result<()> {
    let repo = current_repo(start)?;
    let id = refs::find(&repo, name, kind)?;
    println!("{id}");
    Ok(())
}
