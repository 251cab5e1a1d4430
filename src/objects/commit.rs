//! Commit objects: a KVLM document with conventional `tree`/`parent`/`author`/
//! `committer` headers.

use super::kvlm::Kvlm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    kvlm: Kvlm,
}

impl Commit {
    pub fn new(kvlm: Kvlm) -> Self {
        Commit { kvlm }
    }

    pub fn parse(data: &[u8]) -> Commit {
        Commit {
            kvlm: Kvlm::parse(data),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.kvlm.serialize()
    }

    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    /// The single `tree` header, if present.
    pub fn tree(&self) -> Option<String> {
        self.kvlm
            .get_one(b"tree")
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }

    /// Every `parent` header, in order.
    pub fn parents(&self) -> Vec<String> {
        self.kvlm
            .get(b"parent")
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .collect()
    }

    pub fn has_parent(&self) -> bool {
        self.kvlm.get(b"parent").next().is_some()
    }

    pub fn author(&self) -> Option<&[u8]> {
        self.kvlm.get_one(b"author")
    }

    pub fn committer(&self) -> Option<&[u8]> {
        self.kvlm.get_one(b"committer")
    }

    pub fn message(&self) -> &[u8] {
        &self.kvlm.message
    }
}
