//! End-to-end scenarios driving the public API the way the CLI front end does,
//! each against a fresh `tempfile::TempDir` working directory.

use std::fs;

use tempfile::tempdir;
use wyag::error::GitError;
use wyag::objects::kvlm::Kvlm;
use wyag::objects::tree::Leaf;
use wyag::objects::{self, Blob, Commit, GitObject, Tree};
use wyag::repository::Repository;
use wyag::{checkout, refs};

#[test]
fn s1_init_creates_head_and_default_config() {
    let root = tempdir().unwrap();
    let repo_path = root.path().join("r");
    Repository::create(&repo_path).unwrap();

    let head = fs::read_to_string(repo_path.join(".git").join("HEAD")).unwrap();
    assert_eq!(head, "ref: refs/heads/master\n");

    let opened = Repository::open(&repo_path, false).unwrap();
    assert_eq!(
        opened.config().get("core", "repositoryformatversion"),
        Some("0".to_string())
    );
    assert_eq!(opened.config().get("core", "filemode"), Some("false".to_string()));
    assert_eq!(opened.config().get("core", "bare"), Some("false".to_string()));
}

#[test]
fn s2_hash_object_of_known_bytes_matches_known_id() {
    let root = tempdir().unwrap();
    let repo = Repository::create(&root.path().join("r")).unwrap();

    let object = GitObject::Blob(Blob::new(b"hi\n\n".to_vec()));
    let id = objects::write(&repo, &object).unwrap();

    assert_eq!(id, "ce013625030ba8dba906f756967f9e9ca394464a");
    assert!(repo.gitdir().join("objects").join("ce").join(&id[2..]).exists());
}

#[test]
fn s3_tree_serialization_orders_file_before_samename_subtree_path() {
    let id_a = "a".repeat(40);
    let id_b = "b".repeat(40);
    let tree = Tree::new(vec![
        Leaf::new("100644", "a", id_a.clone()),
        Leaf::new("40000", "a.b", id_b.clone()),
    ]);

    let serialized = tree.serialize();
    let parsed = Tree::parse(&serialized).unwrap();
    assert_eq!(parsed.items[0].path, "a");
    assert_eq!(parsed.items[1].path, "a.b");
}

#[test]
fn s4_commit_round_trips_through_write_and_read() {
    let root = tempdir().unwrap();
    let repo = Repository::create(&root.path().join("r")).unwrap();

    let blob = GitObject::Blob(Blob::new(b"contents\n".to_vec()));
    let blob_id = objects::write(&repo, &blob).unwrap();
    let tree = GitObject::Tree(Tree::new(vec![Leaf::new("100644", "file.txt", blob_id)]));
    let tree_id = objects::write(&repo, &tree).unwrap();

    let mut kvlm = Kvlm::new(b"Summary\n\nBody line one\n\nBody line two\n".to_vec());
    kvlm.push(&b"tree"[..], tree_id.as_bytes());
    kvlm.push(&b"parent"[..], b"1111111111111111111111111111111111111111".as_ref());
    kvlm.push(&b"parent"[..], b"2222222222222222222222222222222222222222".as_ref());
    kvlm.push(&b"author"[..], &b"A U Thor <a@example.com> 0 +0000"[..]);
    kvlm.push(
        &b"committer"[..],
        &b"A U Thor <a@example.com> 0 +0000\nwith a continuation"[..],
    );
    let commit = GitObject::Commit(Commit::new(kvlm));
    let commit_id = objects::write(&repo, &commit).unwrap();

    let read_back = objects::read_as(&repo, &commit_id, "commit").unwrap();
    assert_eq!(read_back, commit);
    match read_back {
        GitObject::Commit(c) => {
            assert_eq!(c.parents().len(), 2);
            assert_eq!(c.tree().as_deref(), Some(tree_id.as_str()));
        }
        _ => panic!("expected a commit"),
    }
}

#[test]
fn s5_ambiguous_branch_and_tag_with_same_name() {
    let root = tempdir().unwrap();
    let repo = Repository::create(&root.path().join("r")).unwrap();

    refs::create(&repo, &["refs", "heads", "main"], &"a".repeat(40)).unwrap();
    assert_eq!(refs::find(&repo, "main", None).unwrap(), "a".repeat(40));

    refs::create(&repo, &["refs", "tags", "main"], &"b".repeat(40)).unwrap();
    let err = refs::find(&repo, "main", None).unwrap_err();
    match err {
        GitError::AmbiguousRef { candidates, .. } => {
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected AmbiguousRef, got {other:?}"),
    }
}

#[test]
fn s6_checkout_reproduces_blob_bytes_and_rejects_nonempty_target() {
    let root = tempdir().unwrap();
    let repo = Repository::create(&root.path().join("r")).unwrap();

    let blob = GitObject::Blob(Blob::new(b"exact bytes\n".to_vec()));
    let blob_id = objects::write(&repo, &blob).unwrap();
    let tree = GitObject::Tree(Tree::new(vec![Leaf::new("100644", "out.txt", blob_id)]));
    let tree_id = objects::write(&repo, &tree).unwrap();

    let mut kvlm = Kvlm::new(b"root commit\n".to_vec());
    kvlm.push(&b"tree"[..], tree_id.as_bytes());
    let commit = GitObject::Commit(Commit::new(kvlm));
    let commit_id = objects::write(&repo, &commit).unwrap();

    let work = tempdir().unwrap();
    let dest = work.path().join("checkout");
    let resolved_tree = refs::find(&repo, &commit_id, Some("tree")).unwrap();
    checkout::checkout(&repo, &resolved_tree, &dest).unwrap();
    assert_eq!(fs::read(dest.join("out.txt")).unwrap(), b"exact bytes\n");

    let occupied = work.path().join("occupied");
    fs::create_dir_all(&occupied).unwrap();
    fs::write(occupied.join("existing"), b"x").unwrap();
    let err = checkout::checkout(&repo, &resolved_tree, &occupied).unwrap_err();
    assert!(matches!(err, GitError::DirectoryNotEmpty(_)));
}

#[test]
fn full_workflow_init_commit_tag_checkout() {
    let root = tempdir().unwrap();
    let repo_path = root.path().join("project");
    let repo = Repository::create(&repo_path).unwrap();

    let blob = GitObject::Blob(Blob::new(b"readme contents\n".to_vec()));
    let blob_id = objects::write(&repo, &blob).unwrap();
    let tree = GitObject::Tree(Tree::new(vec![Leaf::new("100644", "README", blob_id)]));
    let tree_id = objects::write(&repo, &tree).unwrap();

    let mut kvlm = Kvlm::new(b"initial import\n".to_vec());
    kvlm.push(&b"tree"[..], tree_id.as_bytes());
    kvlm.push(&b"author"[..], &b"A U Thor <a@example.com> 0 +0000"[..]);
    kvlm.push(&b"committer"[..], &b"A U Thor <a@example.com> 0 +0000"[..]);
    let commit = GitObject::Commit(Commit::new(kvlm));
    let commit_id = objects::write(&repo, &commit).unwrap();

    refs::create(&repo, &["refs", "heads", "master"], &commit_id).unwrap();
    assert_eq!(refs::resolve(&repo, &["HEAD"]).unwrap(), Some(commit_id.clone()));

    refs::create(&repo, &["refs", "tags", "v1.0"], &commit_id).unwrap();
    assert_eq!(refs::find(&repo, "v1.0", None).unwrap(), commit_id);

    let dest = root.path().join("work");
    let tree_for_checkout = refs::find(&repo, "master", Some("tree")).unwrap();
    checkout::checkout(&repo, &tree_for_checkout, &dest).unwrap();
    assert_eq!(fs::read(dest.join("README")).unwrap(), b"readme contents\n");
}
