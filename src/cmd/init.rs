use std::path::Path;

use crate::error::Result;
use crate::repository::Repository;

pub fn run(path: &Path) -> Result<()> {
    Repository::create(path)?;
    Ok(())
}
