use std::path::Path;

use crate::error::Result;
use crate::index::Index;

use super::current_repo;

pub fn run(start: &Path, verbose: bool) -> Result<()> {
    let repo = current_repo(start)?;
    let index_path = repo.gitdir().join("index");
    if !index_path.exists() {
        return Ok(());
    }

    let data = std::fs::read(&index_path)?;
    let index = Index::parse(&data)?;

    for entry in &index.entries {
        println!("{}", entry.path);
        if verbose {
            println!(
                "  ctime: {}:{} mtime: {}:{} dev: {} ino: {} uid: {} gid: {} size: {} flags: {}",
                entry.stat.ctime_seconds,
                entry.stat.ctime_nanoseconds,
                entry.stat.mtime_seconds,
                entry.stat.mtime_nanoseconds,
                entry.stat.dev,
                entry.stat.ino,
                entry.stat.uid,
                entry.stat.gid,
                entry.stat.size,
                entry.flags.stage,
            );
            println!("  id: {}", entry.id);
        }
    }
    Ok(())
}
