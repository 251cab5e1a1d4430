use std::path::Path;

use crate::error::Result;
use crate::refs;

use super::current_repo;

pub fn run(start: &Path, with_hash: bool) -> Result<()> {
    let repo = current_repo(start)?;
    for (name, id) in refs::list(&repo)? {
        if with_hash {
            println!("{id} {name}");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
