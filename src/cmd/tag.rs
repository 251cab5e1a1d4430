use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{GitError, Result};
use crate::objects::kvlm::Kvlm;
use crate::objects::{self, GitObject};
use crate::refs;

use super::current_repo;

/// Lists every tag name, or creates a new one if `name` is given.
pub fn run(start: &Path, name: Option<&str>, object: Option<&str>, annotate: bool) -> Result<()> {
    let repo = current_repo(start)?;

    let Some(name) = name else {
        for (ref_name, _) in refs::list(&repo)? {
            if let Some(tag_name) = ref_name.strip_prefix("refs/tags/") {
                println!("{tag_name}");
            }
        }
        return Ok(());
    };

    let object_name = object.unwrap_or("HEAD");
    let target_id = refs::find(&repo, object_name, None)?;

    let id = if annotate {
        let kind = objects::read(&repo, &target_id)?
            .ok_or_else(|| GitError::Malformed {
                id: target_id.clone(),
                reason: "resolved id names no object".to_string(),
                offset: 0,
            })?
            .kind()
            .to_string();
        let mut kvlm = Kvlm::new(format!("tag {name}\n").into_bytes());
        kvlm.push(&b"object"[..], target_id.as_bytes());
        kvlm.push(&b"type"[..], kind.as_bytes());
        kvlm.push(&b"tag"[..], name.as_bytes());
        kvlm.push(&b"tagger"[..], tagger_line().as_bytes());
        let tag = GitObject::Tag(crate::objects::Tag::new(kvlm));
        objects::write(&repo, &tag)?
    } else {
        target_id
    };

    refs::create(&repo, &["refs", "tags", name], &id)
}

fn tagger_line() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("wyag <wyag@localhost> {now} +0000")
}
